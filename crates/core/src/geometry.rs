//! The hard-coded quad: two triangles in the XY plane at Z = 0, drawn as a
//! triangle strip.

/// Floats per vertex (x, y, z).
pub const COMPONENTS_PER_VERTEX: usize = 3;

/// Number of vertices in the quad.
pub const QUAD_VERTEX_COUNT: usize = 4;

/// Vertex positions in strip order: top-right, top-left, bottom-right, bottom-left.
pub const QUAD_VERTICES: [f32; QUAD_VERTEX_COUNT * COMPONENTS_PER_VERTEX] = [
    1.0, 1.0, 0.0, //
    -1.0, 1.0, 0.0, //
    1.0, -1.0, 0.0, //
    -1.0, -1.0, 0.0,
];

/// Iterates the quad as `[x, y, z]` triples.
pub fn quad_positions() -> impl Iterator<Item = [f32; 3]> {
    QUAD_VERTICES
        .chunks_exact(COMPONENTS_PER_VERTEX)
        .map(|c| [c[0], c[1], c[2]])
}
