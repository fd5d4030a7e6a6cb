/// Gauss-Legendre Quadrature over an arbitrary interval
pub mod glq;

pub use glq::gauss_quad;
