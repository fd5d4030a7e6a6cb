//! A 1D Finite Element Method solver for a steady-state diffusion boundary value problem
//!
//! The solution is expanded over piecewise-linear "hat" basis functions on a uniform mesh
//! of the interval `[0, 2]`. The weak-form terms are integrated with 2-point Gauss-Legendre
//! Quadrature, collected into a dense stiffness matrix and load vector, and solved directly
//! with unpivoted Gaussian elimination.
//!
//! # Example
//! ```
//! use fem_1d::fem_problem::{galerkin::galerkin_sample, linalg::gaussian_elimination::gaussian_solve};
//! use fem_1d::{SolutionField, UniformMesh};
//!
//! // a single element spanning the entire domain
//! let mesh = UniformMesh::new(1);
//!
//! // assemble the dense system and solve it directly
//! let solution = gaussian_solve(galerkin_sample(&mesh));
//! assert!((solution[0] - 30.0).abs() < 1e-12);
//!
//! // reconstruct the solution field at the mesh nodes
//! let field = SolutionField::new(&mesh, solution).unwrap();
//! assert!((field.eval(0.0) - 30.0).abs() < 1e-12);
//! assert!(field.eval(2.0).abs() < 1e-12);
//! ```

/// Structures to define the geometry of the computational domain and evaluate Basis Functions over it
pub mod fem_domain;
/// Structures and functions to assemble and solve the discrete diffusion problem
pub mod fem_problem;

pub use fem_domain::basis::HatFn;
pub use fem_domain::fields::SolutionField;
pub use fem_domain::mesh::UniformMesh;
pub use fem_problem::linalg::DenseSystem;
