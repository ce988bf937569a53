//! The slice of the WebGL API the quad pipeline uses.
//!
//! `GlBackend` mirrors the method shapes of `glow::HasContext` but only for
//! the calls this crate issues, with typed enums instead of raw GL
//! constants. The production implementation wraps `glow::Context`
//! (`render` feature); tests use a recording fake.

use crate::shader::ShaderRole;

/// Capabilities toggled with `enable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    DepthTest,
}

/// Depth comparison functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFunc {
    LessOrEqual,
}

/// Buffers cleared by `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearMask {
    pub color: bool,
    pub depth: bool,
}

impl ClearMask {
    pub const COLOR_AND_DEPTH: Self = Self {
        color: true,
        depth: true,
    };
}

/// Usage hint passed with buffer uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    StaticDraw,
}

/// Primitive assembly mode for `draw_arrays`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    TriangleStrip,
}

/// Rendering context operations.
///
/// Handle types are small `Copy` ids owned by the context; creation
/// failures are reported as `Err(String)` with the driver's message, the
/// same convention `glow` uses.
pub trait GlBackend {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type UniformLocation: Clone;

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn enable(&self, cap: Capability);
    fn depth_func(&self, func: DepthFunc);
    fn clear(&self, mask: ClearMask);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    fn create_shader(&self, role: ShaderRole) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Points attribute `index` at the bound array buffer as `size` floats
    /// per vertex.
    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    fn array_buffer_data_f32(&self, data: &[f32], usage: BufferUsage);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    /// Uploads a column-major 4x4 matrix (`transpose = false`).
    fn uniform_matrix4(&self, location: &Self::UniformLocation, columns: &[f32; 16]);

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32);
}
