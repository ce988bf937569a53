//! Drawing the single frame.

use super::backend::{ClearMask, GlBackend, Primitive};
use super::buffer::QuadBuffer;
use super::program::ShaderProgram;
use crate::camera::{Camera, FrameMatrices};
use crate::error::RenderError;
use crate::geometry::COMPONENTS_PER_VERTEX;
use crate::math::Mat4;
use crate::shader::{MODEL_VIEW_UNIFORM, PROJECTION_UNIFORM};

/// The rectangle of the drawing buffer that frames render into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// A viewport covering `width` x `height` from the origin.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidDimensions` if either side is zero or
    /// does not fit in an `i32`.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || i32::try_from(width.max(height)).is_err() {
            return Err(RenderError::InvalidDimensions);
        }
        Ok(Self {
            x: 0,
            y: 0,
            width,
            height,
        })
    }

    /// Applies this rectangle with `gl.viewport`.
    pub fn apply<G: GlBackend + ?Sized>(&self, gl: &G) {
        gl.viewport(self.x, self.y, self.width as i32, self.height as i32);
    }
}

/// Clears, binds the quad to the position attribute, uploads both matrices,
/// and draws the strip. Returns the matrices that were uploaded.
pub fn draw_frame<G: GlBackend>(
    gl: &G,
    program: &ShaderProgram<G>,
    quad: &QuadBuffer<G>,
    camera: &Camera,
    viewport: Viewport,
) -> FrameMatrices {
    viewport.apply(gl);
    gl.clear(ClearMask::COLOR_AND_DEPTH);

    let matrices = camera.matrices(viewport.width, viewport.height);

    gl.bind_array_buffer(Some(quad.buffer()));
    gl.vertex_attrib_pointer_f32(
        program.position_attribute(),
        COMPONENTS_PER_VERTEX as i32,
        0,
        0,
    );

    gl.use_program(Some(program.program()));
    set_matrix_uniform(gl, program, PROJECTION_UNIFORM, &matrices.projection);
    set_matrix_uniform(gl, program, MODEL_VIEW_UNIFORM, &matrices.model_view);

    gl.draw_arrays(Primitive::TriangleStrip, 0, quad.vertex_count() as i32);
    matrices
}

fn set_matrix_uniform<G: GlBackend>(gl: &G, program: &ShaderProgram<G>, name: &str, m: &Mat4) {
    match gl.uniform_location(program.program(), name) {
        Some(location) => gl.uniform_matrix4(&location, &m.to_cols_array()),
        // WebGL ignores uploads to a null location; say so instead.
        None => log::warn!("uniform '{name}' is not active in the program, skipping upload"),
    }
}
