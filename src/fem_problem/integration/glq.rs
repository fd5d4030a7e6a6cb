const GLQ_WEIGHTS: [f64; 2] = [1.0, 1.0];

/// 1D Gauss-Legendre Quadrature integral of some function F over the interval `[a, b]`
/// using the 2-point rule.
///
/// The reference points `±1/√3` are mapped onto `[a, b]` with the affine transform
/// `x = (b - a)/2 * ξ + (a + b)/2`, the integrand is evaluated at both mapped points with
/// unit weights, and the sum is scaled by `(b - a)/2`. Exact for polynomials up to degree 3.
///
/// The caller must ensure `a <= b`. A discontinuity of the integrand strictly inside
/// `[a, b]` degrades the result to an approximation rather than an error.
///
/// ```
/// use fem_1d::fem_problem::integration::glq::gauss_quad;
///
/// let area = gauss_quad(0.0, 2.0, |_| 1.0);
/// assert!((area - 2.0).abs() < 1e-12);
///
/// // exact through cubics
/// let cubic = gauss_quad(0.0, 1.0, |x| x.powi(3));
/// assert!((cubic - 0.25).abs() < 1e-12);
/// ```
pub fn gauss_quad<F>(a: f64, b: f64, integrand: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let scale = (b - a) / 2.0;
    let offset = (a + b) / 2.0;
    let glq_point = 3.0_f64.sqrt() / 3.0;

    [-glq_point, glq_point]
        .iter()
        .zip(GLQ_WEIGHTS.iter())
        .map(|(xi, weight)| weight * integrand(scale * xi + offset))
        .sum::<f64>()
        * scale
}
