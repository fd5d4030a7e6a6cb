/// Direct solution of a [DenseSystem] via unpivoted Gaussian elimination
pub mod gaussian_elimination;

use nalgebra::{DMatrix, DVector};

/// A dense square linear system `B·x = L`.
///
/// Assembly produces this pair as an owned value; the solver consumes it and transforms it
/// in place during elimination, so no component ever aliases the matrix while it is being
/// destroyed.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseSystem {
    /// System matrix `B`
    pub matrix: DMatrix<f64>,
    /// Right-hand side `L`
    pub rhs: DVector<f64>,
}

impl DenseSystem {
    /// An all-zero system of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            matrix: DMatrix::zeros(dimension, dimension),
            rhs: DVector::zeros(dimension),
        }
    }

    /// Number of unknowns (the matrix is `dimension x dimension` by construction)
    pub fn dimension(&self) -> usize {
        self.rhs.len()
    }
}
