//! `GlBackend` implementation for `glow::Context`.
//!
//! On the web the context comes from
//! `glow::Context::from_webgl1_context`; natively from any GL loader.

use super::backend::{BufferUsage, Capability, ClearMask, DepthFunc, GlBackend, Primitive};
use crate::shader::ShaderRole;
use glow::HasContext;

fn shader_type(role: ShaderRole) -> u32 {
    match role {
        ShaderRole::Vertex => glow::VERTEX_SHADER,
        ShaderRole::Fragment => glow::FRAGMENT_SHADER,
    }
}

fn clear_bits(mask: ClearMask) -> u32 {
    let mut bits = 0;
    if mask.color {
        bits |= glow::COLOR_BUFFER_BIT;
    }
    if mask.depth {
        bits |= glow::DEPTH_BUFFER_BIT;
    }
    bits
}

impl Capability {
    fn gl_enum(self) -> u32 {
        match self {
            Capability::DepthTest => glow::DEPTH_TEST,
        }
    }
}

impl DepthFunc {
    fn gl_enum(self) -> u32 {
        match self {
            DepthFunc::LessOrEqual => glow::LEQUAL,
        }
    }
}

impl BufferUsage {
    fn gl_enum(self) -> u32 {
        match self {
            BufferUsage::StaticDraw => glow::STATIC_DRAW,
        }
    }
}

impl Primitive {
    fn gl_enum(self) -> u32 {
        match self {
            Primitive::TriangleStrip => glow::TRIANGLE_STRIP,
        }
    }
}

// SAFETY (whole impl): glow marks every GL call unsafe. Each method forwards
// typed arguments as valid GL enums, and object handles only ever come from
// this same context's create_* calls.
#[allow(unsafe_code)]
impl GlBackend for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type UniformLocation = glow::UniformLocation;

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn enable(&self, cap: Capability) {
        unsafe { HasContext::enable(self, cap.gl_enum()) }
    }

    fn depth_func(&self, func: DepthFunc) {
        unsafe { HasContext::depth_func(self, func.gl_enum()) }
    }

    fn clear(&self, mask: ClearMask) {
        unsafe { HasContext::clear(self, clear_bits(mask)) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn create_shader(&self, role: ShaderRole) -> Result<glow::Shader, String> {
        unsafe { HasContext::create_shader(self, shader_type(role)) }
    }

    fn shader_source(&self, shader: glow::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: glow::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: glow::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: glow::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<glow::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: glow::Program, shader: glow::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: glow::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: glow::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: glow::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<glow::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: glow::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn attrib_location(&self, program: glow::Program, name: &str) -> Option<u32> {
        unsafe { self.get_attrib_location(program, name) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(self, index, size, glow::FLOAT, false, stride, offset)
        }
    }

    fn create_buffer(&self) -> Result<glow::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_array_buffer(&self, buffer: Option<glow::Buffer>) {
        unsafe { self.bind_buffer(glow::ARRAY_BUFFER, buffer) }
    }

    fn array_buffer_data_f32(&self, data: &[f32], usage: BufferUsage) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe { self.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, usage.gl_enum()) }
    }

    fn delete_buffer(&self, buffer: glow::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn uniform_location(&self, program: glow::Program, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn uniform_matrix4(&self, location: &glow::UniformLocation, columns: &[f32; 16]) {
        unsafe { self.uniform_matrix_4_f32_slice(Some(location), false, columns) }
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, mode.gl_enum(), first, count) }
    }
}
