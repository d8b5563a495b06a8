//! Wireframe mesh tables and primitive generation.

use glam::Vec3;

/// Index pair joining two vertices of a wireframe.
pub type Edge = (usize, usize);

/// Unit cube corners at (±1, ±1, ±1): back face (z = -1) then front face (z = +1).
#[rustfmt::skip]
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0), // back-bottom-left
    Vec3::new( 1.0, -1.0, -1.0), // back-bottom-right
    Vec3::new( 1.0,  1.0, -1.0), // back-top-right
    Vec3::new(-1.0,  1.0, -1.0), // back-top-left
    Vec3::new(-1.0, -1.0,  1.0), // front-bottom-left
    Vec3::new( 1.0, -1.0,  1.0), // front-bottom-right
    Vec3::new( 1.0,  1.0,  1.0), // front-top-right
    Vec3::new(-1.0,  1.0,  1.0), // front-top-left
];

#[rustfmt::skip]
pub const CUBE_EDGES: [Edge; 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0), // Back face
    (4, 5), (5, 6), (6, 7), (7, 4), // Front face
    (0, 4), (1, 5), (2, 6), (3, 7), // Connecting edges
];

/// Golden ratio.
const PHI: f32 = 1.618_034;

/// Icosahedron corners as cyclic permutations of (0, ±1, ±φ), before normalization.
#[rustfmt::skip]
const ICOSAHEDRON_RAW: [[f32; 3]; 12] = [
    [-1.0,  PHI,  0.0],
    [ 1.0,  PHI,  0.0],
    [-1.0, -PHI,  0.0],
    [ 1.0, -PHI,  0.0],
    [ 0.0, -1.0,  PHI],
    [ 0.0,  1.0,  PHI],
    [ 0.0, -1.0, -PHI],
    [ 0.0,  1.0, -PHI],
    [ PHI,  0.0, -1.0],
    [ PHI,  0.0,  1.0],
    [-PHI,  0.0, -1.0],
    [-PHI,  0.0,  1.0],
];

/// The 30 icosahedron edges; every vertex has degree 5.
#[rustfmt::skip]
pub const ICOSAHEDRON_EDGES: [Edge; 30] = [
    (0, 11), (0, 5), (0, 1), (0, 7), (0, 10),
    (1, 5), (5, 9), (11, 5), (11, 4), (11, 10),
    (2, 3), (2, 4), (2, 6), (2, 10), (2, 11),
    (1, 7), (1, 9), (3, 9), (3, 4), (3, 6),
    (4, 9), (6, 7), (6, 8), (6, 10), (7, 8),
    (7, 10), (8, 9), (8, 3), (1, 8), (4, 5),
];

/// Icosahedron vertices on the unit sphere.
pub fn icosahedron_vertices() -> [Vec3; 12] {
    ICOSAHEDRON_RAW.map(|v| Vec3::from_array(v).normalize())
}

/// Wireframe primitives with constant local geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Cube,
    Icosahedron,
}

impl Shape {
    /// Local vertices in unit space.
    pub fn local_vertices(self) -> Vec<Vec3> {
        match self {
            Shape::Cube => CUBE_VERTICES.to_vec(),
            Shape::Icosahedron => icosahedron_vertices().to_vec(),
        }
    }

    pub fn edges(self) -> &'static [Edge] {
        match self {
            Shape::Cube => &CUBE_EDGES,
            Shape::Icosahedron => &ICOSAHEDRON_EDGES,
        }
    }

    /// Divisor applied to the solid's size to get its local → world scale.
    /// Cube corners sit at ±1, so a cube of `size` spans `size`; the
    /// icosahedron is unit-radius and `size` is its radius.
    pub fn size_divisor(self) -> f32 {
        match self {
            Shape::Cube => 2.0,
            Shape::Icosahedron => 1.0,
        }
    }

    /// Default spin in degrees per second.
    pub fn default_rotation_speed(self) -> f32 {
        match self {
            Shape::Cube => 0.0,
            Shape::Icosahedron => 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn degrees(vertex_count: usize, edges: &[Edge]) -> Vec<usize> {
        let mut deg = vec![0; vertex_count];
        for &(a, b) in edges {
            deg[a] += 1;
            deg[b] += 1;
        }
        deg
    }

    fn distinct(edges: &[Edge]) -> usize {
        edges
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect::<HashSet<_>>()
            .len()
    }

    #[test]
    fn cube_table_shape() {
        assert_eq!(CUBE_VERTICES.len(), 8);
        assert_eq!(distinct(&CUBE_EDGES), 12);
        assert!(degrees(8, &CUBE_EDGES).iter().all(|&d| d == 3));
        // Every edge joins corners differing in exactly one axis.
        for &(a, b) in &CUBE_EDGES {
            let d = CUBE_VERTICES[a] - CUBE_VERTICES[b];
            let changed = [d.x, d.y, d.z].iter().filter(|c| c.abs() > 0.0).count();
            assert_eq!(changed, 1, "edge {:?}", (a, b));
        }
        // Back face first, front face second.
        assert!(CUBE_VERTICES[..4].iter().all(|v| v.z == -1.0));
        assert!(CUBE_VERTICES[4..].iter().all(|v| v.z == 1.0));
    }

    #[test]
    fn icosahedron_vertices_are_unit_length() {
        for v in icosahedron_vertices() {
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn icosahedron_edges_are_standard_adjacency() {
        let verts = icosahedron_vertices();
        assert_eq!(distinct(&ICOSAHEDRON_EDGES), 30);
        assert!(degrees(12, &ICOSAHEDRON_EDGES).iter().all(|&d| d == 5));

        // All edges share the unit icosahedron edge length (2 / sqrt(1 + phi^2)).
        let edge_len = 2.0 / (1.0 + PHI * PHI).sqrt();
        for &(a, b) in &ICOSAHEDRON_EDGES {
            assert!((verts[a].distance(verts[b]) - edge_len).abs() < 1e-4);
        }
    }

    #[test]
    fn edge_indices_in_bounds() {
        for shape in [Shape::Cube, Shape::Icosahedron] {
            let n = shape.local_vertices().len();
            assert!(shape.edges().iter().all(|&(a, b)| a < n && b < n));
        }
    }
}
