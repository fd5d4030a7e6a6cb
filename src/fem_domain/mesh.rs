/// Left end of the fixed computational domain
pub const DOMAIN_MIN: f64 = 0.0;
/// Right end of the fixed computational domain
pub const DOMAIN_MAX: f64 = 2.0;

/// A uniform partition of the interval `[0, 2]` into equal-width elements.
///
/// Only the element count is stored; the element width and node positions are derived
/// analytically on demand. Node `i` sits at `i * h` for `i` in `0..=num_elems`.
///
/// There is one unknown (and one [HatFn](crate::HatFn)) per element, tied to nodes
/// `0..num_elems`; the rightmost node carries no equation in this formulation.
///
/// ```
/// use fem_1d::UniformMesh;
///
/// let mesh = UniformMesh::new(4);
/// assert_eq!(mesh.num_nodes(), 5);
/// assert_eq!(mesh.num_unknowns(), 4);
/// assert!((mesh.elem_width() - 0.5).abs() < 1e-14);
/// assert!((mesh.node_pos(3) - 1.5).abs() < 1e-14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformMesh {
    num_elems: usize,
}

impl UniformMesh {
    /// Construct a mesh with `num_elems` equal-width elements over the fixed domain.
    ///
    /// A zero element count is not rejected; it yields a non-finite element width and
    /// garbage values downstream.
    pub fn new(num_elems: usize) -> Self {
        Self { num_elems }
    }

    pub fn num_elems(&self) -> usize {
        self.num_elems
    }

    /// Number of unknowns in the discrete system (one per element)
    pub fn num_unknowns(&self) -> usize {
        self.num_elems
    }

    pub fn num_nodes(&self) -> usize {
        self.num_elems + 1
    }

    /// Width `h` of every element
    pub fn elem_width(&self) -> f64 {
        (DOMAIN_MAX - DOMAIN_MIN) / self.num_elems as f64
    }

    /// Position of node `i`
    pub fn node_pos(&self, i: usize) -> f64 {
        DOMAIN_MIN + i as f64 * self.elem_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESH_ACCURACY: f64 = 1e-12;

    #[test]
    fn derives_spacing_and_node_positions() {
        let mesh = UniformMesh::new(8);

        assert_eq!(mesh.num_elems(), 8);
        assert_eq!(mesh.num_unknowns(), 8);
        assert_eq!(mesh.num_nodes(), 9);

        assert!((mesh.elem_width() - 0.25).abs() < MESH_ACCURACY);
        for i in 0..mesh.num_nodes() {
            assert!((mesh.node_pos(i) - 0.25 * i as f64).abs() < MESH_ACCURACY);
        }
    }

    #[test]
    fn nodes_cover_the_fixed_interval() {
        for n in [1, 2, 3, 5, 10, 17] {
            let mesh = UniformMesh::new(n);
            assert!((mesh.node_pos(0) - DOMAIN_MIN).abs() < MESH_ACCURACY);
            assert!((mesh.node_pos(n) - DOMAIN_MAX).abs() < MESH_ACCURACY);
        }
    }
}
