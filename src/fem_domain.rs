/// Structures for Basis Function evaluation and the material coefficient
pub mod basis;
/// Structures to reconstruct and export solution fields over a mesh
pub mod fields;
/// The geometric structure of the 1D computational domain
pub mod mesh;
