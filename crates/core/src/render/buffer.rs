//! GPU-side storage for the quad's vertex positions.

use super::backend::{BufferUsage, GlBackend};
use crate::error::RenderError;
use crate::geometry::{COMPONENTS_PER_VERTEX, QUAD_VERTICES};

/// An array buffer holding the quad, uploaded once with `STATIC_DRAW`.
pub struct QuadBuffer<G: GlBackend> {
    buffer: G::Buffer,
    len: usize,
}

impl<G: GlBackend> QuadBuffer<G> {
    /// Creates an array buffer and uploads [`QUAD_VERTICES`].
    ///
    /// The buffer stays bound to `ARRAY_BUFFER` afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Resource` if the backend cannot create a buffer.
    pub fn upload(gl: &G) -> Result<Self, RenderError> {
        let buffer = gl
            .create_buffer()
            .map_err(|e| RenderError::Resource(format!("vertex buffer: {e}")))?;
        gl.bind_array_buffer(Some(buffer));
        gl.array_buffer_data_f32(&QUAD_VERTICES, BufferUsage::StaticDraw);
        log::debug!("uploaded {} floats to the quad buffer", QUAD_VERTICES.len());
        Ok(Self {
            buffer,
            len: QUAD_VERTICES.len(),
        })
    }

    pub fn buffer(&self) -> G::Buffer {
        self.buffer
    }

    /// Number of floats stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn vertex_count(&self) -> usize {
        self.len / COMPONENTS_PER_VERTEX
    }
}
