use super::mesh::UniformMesh;

/// Piecewise-constant diffusion coefficient of the two-region material filling the domain:
/// `3.0` on `[0, 1]` and `5.0` on `(1, 2]`.
pub fn diffusivity(x: f64) -> f64 {
    if x <= 1.0 {
        3.0
    } else {
        5.0
    }
}

/// A piecewise-linear "hat" Basis Function centered at node `index` of a [UniformMesh].
///
/// The hat rises linearly from 0 to 1 over `[x_{i-1}, x_i)` and falls linearly from 1 to 0
/// over `[x_i, x_{i+1}]`; it is 0 everywhere else. The rising interval is half-open on the
/// right, so the center node itself is evaluated by the falling branch and returns exactly
/// `1.0`. The support is not clamped to the domain: the hat at node 0 extends to `-h`.
///
/// ```
/// use fem_1d::{HatFn, UniformMesh};
///
/// let mesh = UniformMesh::new(4);
/// let hat = HatFn::new(&mesh, 2);
///
/// assert_eq!(hat.value(1.0), 1.0);
/// assert_eq!(hat.value(0.75), 0.5);
/// assert_eq!(hat.value(0.25), 0.0);
///
/// assert_eq!(hat.deriv(0.75), 2.0);
/// assert_eq!(hat.deriv(1.25), -2.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HatFn {
    left: f64,
    center: f64,
    right: f64,
}

impl HatFn {
    pub fn new(mesh: &UniformMesh, index: usize) -> Self {
        let h = mesh.elem_width();
        let idx = index as f64;
        Self {
            left: (idx - 1.0) * h,
            center: idx * h,
            right: (idx + 1.0) * h,
        }
    }

    /// Evaluate the hat at an arbitrary point; 0 outside the support
    pub fn value(&self, x: f64) -> f64 {
        if self.left <= x && x < self.center {
            (x - self.left) / (self.center - self.left)
        } else if self.center <= x && x <= self.right {
            (self.right - x) / (self.right - self.center)
        } else {
            0.0
        }
    }

    /// Slope of the linear branch containing `x`; 0 outside the support.
    ///
    /// Uses the same interval conventions as [value](Self::value), so the center node
    /// reports the falling branch's slope.
    pub fn deriv(&self, x: f64) -> f64 {
        if self.left <= x && x < self.center {
            1.0 / (self.center - self.left)
        } else if self.center <= x && x <= self.right {
            -1.0 / (self.right - self.center)
        } else {
            0.0
        }
    }
}
