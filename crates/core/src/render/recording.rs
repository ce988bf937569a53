//! Test doubles: a `GlBackend` that records every call, a canvas-like
//! surface with a configurable set of context names, and an alert sink.

use super::backend::{BufferUsage, Capability, ClearMask, DepthFunc, GlBackend, Primitive};
use super::context::{ContextSource, Notifier};
use crate::shader::ShaderRole;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ClearColor([f32; 4]),
    Enable(Capability),
    DepthFunc(DepthFunc),
    Clear(ClearMask),
    Viewport(i32, i32, i32, i32),
    CreateShader(ShaderRole),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram,
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    AttribLocation(String),
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        stride: i32,
        offset: i32,
    },
    CreateBuffer,
    BindArrayBuffer(Option<u32>),
    BufferData {
        len: usize,
        usage: BufferUsage,
    },
    DeleteBuffer(u32),
    UniformLocation(String),
    UniformMatrix4 {
        name: String,
        columns: [f32; 16],
    },
    DrawArrays(Primitive, i32, i32),
}

/// Attribute index handed out for the position attribute.
pub const POSITION_INDEX: u32 = 0;

#[derive(Default)]
pub struct RecordingGl {
    calls: Rc<RefCell<Vec<Call>>>,
    next_id: Cell<u32>,
    shader_roles: RefCell<Vec<(u32, ShaderRole)>>,
    uploaded: RefCell<Vec<f32>>,
    fail_compile: Option<ShaderRole>,
    fail_link: bool,
    fail_buffer: bool,
    missing_attribute: bool,
    missing_uniforms: bool,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_compile(mut self, role: ShaderRole) -> Self {
        self.fail_compile = Some(role);
        self
    }

    pub fn failing_link(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn failing_buffer(mut self) -> Self {
        self.fail_buffer = true;
        self
    }

    pub fn without_attribute(mut self) -> Self {
        self.missing_attribute = true;
        self
    }

    pub fn without_uniforms(mut self) -> Self {
        self.missing_uniforms = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Shared handle to the call log, readable after the context is dropped.
    pub fn call_log(&self) -> Rc<RefCell<Vec<Call>>> {
        Rc::clone(&self.calls)
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn uploaded(&self) -> Vec<f32> {
        self.uploaded.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn role_of(&self, shader: u32) -> Option<ShaderRole> {
        self.shader_roles
            .borrow()
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, role)| *role)
    }
}

impl GlBackend for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.push(Call::ClearColor([r, g, b, a]));
    }

    fn enable(&self, cap: Capability) {
        self.push(Call::Enable(cap));
    }

    fn depth_func(&self, func: DepthFunc) {
        self.push(Call::DepthFunc(func));
    }

    fn clear(&self, mask: ClearMask) {
        self.push(Call::Clear(mask));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.push(Call::Viewport(x, y, width, height));
    }

    fn create_shader(&self, role: ShaderRole) -> Result<u32, String> {
        self.push(Call::CreateShader(role));
        let id = self.next();
        self.shader_roles.borrow_mut().push((id, role));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.push(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.push(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.fail_compile.is_none() || self.fail_compile != self.role_of(shader)
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        "ERROR: 0:1: syntax error".into()
    }

    fn delete_shader(&self, shader: u32) {
        self.push(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        self.push(Call::CreateProgram);
        Ok(self.next())
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.push(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.push(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.push(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: u32) -> String {
        "varying mismatch".into()
    }

    fn use_program(&self, program: Option<u32>) {
        self.push(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.push(Call::DeleteProgram(program));
    }

    fn attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.push(Call::AttribLocation(name.to_string()));
        (!self.missing_attribute).then_some(POSITION_INDEX)
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.push(Call::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.push(Call::VertexAttribPointer {
            index,
            size,
            stride,
            offset,
        });
    }

    fn create_buffer(&self) -> Result<u32, String> {
        self.push(Call::CreateBuffer);
        if self.fail_buffer {
            return Err("out of memory".into());
        }
        Ok(self.next())
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.push(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_data_f32(&self, data: &[f32], usage: BufferUsage) {
        self.push(Call::BufferData {
            len: data.len(),
            usage,
        });
        *self.uploaded.borrow_mut() = data.to_vec();
    }

    fn delete_buffer(&self, buffer: u32) {
        self.push(Call::DeleteBuffer(buffer));
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        self.push(Call::UniformLocation(name.to_string()));
        (!self.missing_uniforms).then(|| name.to_string())
    }

    fn uniform_matrix4(&self, location: &String, columns: &[f32; 16]) {
        self.push(Call::UniformMatrix4 {
            name: location.clone(),
            columns: *columns,
        });
    }

    fn draw_arrays(&self, mode: Primitive, first: i32, count: i32) {
        self.push(Call::DrawArrays(mode, first, count));
    }
}

/// Canvas stand-in that supports a fixed list of context names.
pub struct FakeSurface {
    width: u32,
    height: u32,
    supported: Vec<String>,
    requested: RefCell<Vec<String>>,
    factory: Box<dyn Fn() -> RecordingGl>,
}

impl FakeSurface {
    pub fn new(width: u32, height: u32, supported: &[&str]) -> Self {
        Self {
            width,
            height,
            supported: supported.iter().map(|s| s.to_string()).collect(),
            requested: RefCell::new(Vec::new()),
            factory: Box::new(RecordingGl::new),
        }
    }

    /// Hands out contexts built by `factory` instead of a default `RecordingGl`.
    pub fn with_context(mut self, factory: impl Fn() -> RecordingGl + 'static) -> Self {
        self.factory = Box::new(factory);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl ContextSource for FakeSurface {
    type Context = RecordingGl;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_context(&self, name: &str) -> Option<RecordingGl> {
        self.requested.borrow_mut().push(name.to_string());
        self.supported
            .iter()
            .any(|s| s == name)
            .then(|| (self.factory)())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
