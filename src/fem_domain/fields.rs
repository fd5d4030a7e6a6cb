use super::basis::HatFn;
use super::mesh::UniformMesh;

use nalgebra::DVector;
use std::fs::File;
use std::io::{BufWriter, Write};

#[cfg(feature = "json_export")]
use json::{object, JsonValue};

/// The finite-element solution field over a [UniformMesh].
///
/// Holds the basis-expansion coefficients produced by the solver and reconstructs the
/// solution as `u(x) = Σ_j coeffs[j] * e_j(x)`.
pub struct SolutionField<'m> {
    mesh: &'m UniformMesh,
    coeffs: DVector<f64>,
}

impl<'m> SolutionField<'m> {
    /// Pair a coefficient vector with the mesh it was solved on.
    ///
    /// * `mesh`: a reference to a mesh which must outlive this structure; it is used for
    ///   all subsequent evaluations
    /// * `coeffs`: one coefficient per unknown
    pub fn new(mesh: &'m UniformMesh, coeffs: DVector<f64>) -> Result<Self, String> {
        if coeffs.len() != mesh.num_unknowns() {
            Err(format!(
                "NUnknowns != Coefficient vector length ({} != {}); cannot build solution field!",
                mesh.num_unknowns(),
                coeffs.len()
            ))
        } else {
            Ok(Self { mesh, coeffs })
        }
    }

    /// Reconstruct the approximate solution at an arbitrary point
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .map(|(j, coeff)| coeff * HatFn::new(self.mesh, j).value(x))
            .sum()
    }

    /// The solution sampled at all `n + 1` mesh nodes, as `(position, value)` pairs
    pub fn node_samples(&self) -> Vec<(f64, f64)> {
        (0..self.mesh.num_nodes())
            .map(|i| {
                let x = self.mesh.node_pos(i);
                (x, self.eval(x))
            })
            .collect()
    }

    /// Write the node samples to a plain-text file at the designated `path`: one line per
    /// node with the position and the reconstructed value separated by a space.
    ///
    /// An open failure is propagated to the caller before any data is written.
    pub fn print_to_file(&self, path: impl AsRef<str>) -> std::io::Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);

        for (x, u) in self.node_samples() {
            writeln!(writer, "{} {}", x, u)?;
        }
        writer.flush()
    }

    /// Produce a Json Object holding the node samples as parallel `nodes`/`values` arrays
    #[cfg(feature = "json_export")]
    pub fn to_json(&self) -> JsonValue {
        let (nodes, values): (Vec<f64>, Vec<f64>) = self.node_samples().into_iter().unzip();
        object! {
            "nodes": nodes,
            "values": values,
        }
    }

    /// Write the node samples to a JSON file at the designated `path`
    #[cfg(feature = "json_export")]
    pub fn print_to_json_file(&self, path: impl AsRef<str>) -> std::io::Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.to_json().write(&mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fem_problem::galerkin::galerkin_sample;
    use crate::fem_problem::linalg::gaussian_elimination::gaussian_solve;

    const FIELD_ACCURACY: f64 = 1e-9;

    #[test]
    fn single_element_solution_end_to_end() {
        let mesh = UniformMesh::new(1);
        let solution = gaussian_solve(galerkin_sample(&mesh));
        let field = SolutionField::new(&mesh, solution).unwrap();

        // B is 1x1 with entry -1, L is [-30]; the lone hat is 1 at x=0 and 0 at x=2
        let samples = field.node_samples();
        assert_eq!(samples.len(), 2);
        assert!((samples[0].0).abs() < FIELD_ACCURACY);
        assert!((samples[0].1 - 30.0).abs() < FIELD_ACCURACY);
        assert!((samples[1].0 - 2.0).abs() < FIELD_ACCURACY);
        assert!((samples[1].1).abs() < FIELD_ACCURACY);

        // halfway down the falling branch
        assert!((field.eval(1.0) - 15.0).abs() < FIELD_ACCURACY);
    }

    #[test]
    fn node_samples_are_evenly_spaced_over_the_domain() {
        let mesh = UniformMesh::new(10);
        let field = SolutionField::new(&mesh, DVector::zeros(10)).unwrap();

        let samples = field.node_samples();
        assert_eq!(samples.len(), 11);
        assert!(samples[0].0.abs() < 1e-12);
        assert!((samples[10].0 - 2.0).abs() < 1e-12);
        for pair in samples.windows(2) {
            assert!((pair[1].0 - pair[0].0 - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn rejects_coefficient_length_mismatch() {
        let mesh = UniformMesh::new(2);
        assert!(SolutionField::new(&mesh, DVector::zeros(3)).is_err());
    }

    #[test]
    fn print_to_file_writes_one_line_per_node() {
        let mesh = UniformMesh::new(4);
        let solution = gaussian_solve(galerkin_sample(&mesh));
        let field = SolutionField::new(&mesh, solution).unwrap();

        let path = std::env::temp_dir().join("fem_1d_field_samples_test.txt");
        field.print_to_file(path.to_str().unwrap()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);

        for (i, line) in lines.iter().enumerate() {
            let columns: Vec<f64> = line
                .split(' ')
                .map(|column| column.parse().unwrap())
                .collect();
            assert_eq!(columns.len(), 2);
            assert!((columns[0] - 0.5 * i as f64).abs() < 1e-12);
            assert!((columns[1] - field.eval(mesh.node_pos(i))).abs() < FIELD_ACCURACY);
        }

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let mesh = UniformMesh::new(6);

        let first = gaussian_solve(galerkin_sample(&mesh));
        let second = gaussian_solve(galerkin_sample(&mesh));
        assert_eq!(first, second);

        let field_a = SolutionField::new(&mesh, first).unwrap();
        let field_b = SolutionField::new(&mesh, second).unwrap();
        assert_eq!(field_a.node_samples(), field_b.node_samples());
    }

    #[cfg(feature = "json_export")]
    #[test]
    fn json_export_holds_all_node_samples() {
        let mesh = UniformMesh::new(4);
        let solution = gaussian_solve(galerkin_sample(&mesh));
        let field = SolutionField::new(&mesh, solution).unwrap();

        let field_json = field.to_json();
        assert_eq!(field_json["nodes"].len(), 5);
        assert_eq!(field_json["values"].len(), 5);
        assert!((field_json["nodes"][4].as_f64().unwrap() - 2.0).abs() < 1e-12);
    }
}
