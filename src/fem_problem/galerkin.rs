use super::integration::glq::gauss_quad;
use super::linalg::DenseSystem;
use crate::fem_domain::basis::{diffusivity, HatFn};
use crate::fem_domain::mesh::{UniformMesh, DOMAIN_MAX, DOMAIN_MIN};

/// Load applied at the domain's left end in the weak form
const BOUNDARY_LOAD: f64 = -30.0;
/// Stiffness contribution of the left-end boundary term
const BOUNDARY_STIFFNESS: f64 = 3.0;

/// The weighted inner product of two Basis Functions' derivatives:
/// `∫ E(x) e'_i(x) e'_j(x) dx` over the overlap of their supports, clamped to the domain.
///
/// Hats with non-adjacent indices have disjoint supports, so the integral is exactly `0.0`
/// whenever `|i - j| > 1`. This short-circuit gives the assembly loop its tridiagonal cost.
pub fn stiffness_integral(mesh: &UniformMesh, i: usize, j: usize) -> f64 {
    if i.abs_diff(j) > 1 {
        return 0.0;
    }

    let h = mesh.elem_width();
    let a = DOMAIN_MIN.max((i.max(j) as f64 - 1.0) * h);
    let b = DOMAIN_MAX.min((i.min(j) as f64 + 1.0) * h);

    let e_i = HatFn::new(mesh, i);
    let e_j = HatFn::new(mesh, j);

    gauss_quad(a, b, |x| diffusivity(x) * e_i.deriv(x) * e_j.deriv(x))
}

/// Fill a dense stiffness matrix and load vector by sampling all pairs of Basis Functions
/// over the mesh. Returns an owned [DenseSystem] ready to be consumed by the solver.
///
/// Every entry is overwritten:
/// * `rhs[j] = -30 * e_j(0)` — a load concentrated at the left boundary, nonzero only for
///   the hat supported there
/// * `matrix[(i, j)] = stiffness_integral(i, j) - 3 * e_i(0) * e_j(0)` — the stiffness
///   term plus a boundary correction that only affects the `(0, 0)` entry
///
/// The literal boundary constants are part of the problem statement and are kept verbatim.
pub fn galerkin_sample(mesh: &UniformMesh) -> DenseSystem {
    let n = mesh.num_unknowns();
    let mut system = DenseSystem::zeros(n);

    for j in 0..n {
        system.rhs[j] = BOUNDARY_LOAD * HatFn::new(mesh, j).value(DOMAIN_MIN);
    }

    for i in 0..n {
        let e_i_at_boundary = HatFn::new(mesh, i).value(DOMAIN_MIN);
        for j in 0..n {
            system.matrix[(i, j)] = stiffness_integral(mesh, i, j)
                - BOUNDARY_STIFFNESS * e_i_at_boundary * HatFn::new(mesh, j).value(DOMAIN_MIN);
        }
    }

    system
}
