/// Galerkin sampling of the weak form into a dense linear system
pub mod galerkin;
/// Structures and functions to assist in the integration of Basis Functions
pub mod integration;
/// Dense linear-system storage and a direct solver
pub mod linalg;
