use super::DenseSystem;
use nalgebra::DVector;

/// Solve `B·x = L` by unpivoted Gaussian elimination followed by back-substitution.
///
/// The system is consumed: forward elimination subtracts scaled pivot rows from every row
/// below them (right-hand side included), then back-substitution reads the resulting upper
/// triangle into a freshly allocated solution vector.
///
/// No pivoting is performed. A zero or near-zero pivot divides through anyway and yields
/// non-finite or wildly inaccurate entries; the caller is responsible for handing in a
/// well-conditioned matrix.
///
/// ```
/// use fem_1d::fem_problem::linalg::{gaussian_elimination::gaussian_solve, DenseSystem};
/// use nalgebra::{DMatrix, DVector};
///
/// let system = DenseSystem {
///     matrix: DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]),
///     rhs: DVector::from_column_slice(&[5.0, 10.0]),
/// };
///
/// let solution = gaussian_solve(system);
/// assert!((solution[0] - 1.0).abs() < 1e-12);
/// assert!((solution[1] - 3.0).abs() < 1e-12);
/// ```
pub fn gaussian_solve(system: DenseSystem) -> DVector<f64> {
    let DenseSystem { mut matrix, mut rhs } = system;
    let n = rhs.len();

    for i in 0..n {
        for k in (i + 1)..n {
            let factor = matrix[(k, i)] / matrix[(i, i)];
            for j in 0..n {
                let pivot_row_entry = matrix[(i, j)];
                matrix[(k, j)] -= factor * pivot_row_entry;
            }
            let pivot_rhs = rhs[i];
            rhs[k] -= factor * pivot_rhs;
        }
    }

    let mut solution = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut entry = rhs[i];
        for j in (i + 1)..n {
            entry -= matrix[(i, j)] * solution[j];
        }
        solution[i] = entry / matrix[(i, i)];
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    const SOLVER_ACCURACY: f64 = 1e-9;

    #[test]
    fn reproduces_a_hand_solved_system() {
        // tridiagonal system with known solution [1, 2, 3]
        let system = DenseSystem {
            matrix: DMatrix::from_row_slice(3, 3, &[2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0]),
            rhs: DVector::from_column_slice(&[4.0, 8.0, 8.0]),
        };

        let solution = gaussian_solve(system);
        assert!((solution[0] - 1.0).abs() < SOLVER_ACCURACY);
        assert!((solution[1] - 2.0).abs() < SOLVER_ACCURACY);
        assert!((solution[2] - 3.0).abs() < SOLVER_ACCURACY);
    }

    #[test]
    fn identity_system_returns_its_rhs() {
        let system = DenseSystem {
            matrix: DMatrix::identity(4, 4),
            rhs: DVector::from_column_slice(&[-2.0, 0.5, 7.0, 1.0]),
        };

        let solution = gaussian_solve(system);
        for (entry, expected) in solution.iter().zip([-2.0, 0.5, 7.0, 1.0]) {
            assert!((entry - expected).abs() < SOLVER_ACCURACY);
        }
    }

    #[test]
    fn zero_pivot_produces_non_finite_entries() {
        // a row swap would fix this system; the unpivoted elimination divides by zero instead
        let system = DenseSystem {
            matrix: DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 1.0]),
            rhs: DVector::from_column_slice(&[1.0, 1.0]),
        };

        let solution = gaussian_solve(system);
        assert!(solution.iter().any(|entry| !entry.is_finite()));
    }
}
