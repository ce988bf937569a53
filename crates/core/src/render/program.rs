//! Shader compilation and program linking against a [`GlBackend`].

use super::backend::GlBackend;
use crate::error::RenderError;
use crate::shader::{format_shader_error, ShaderRole, ShaderSources, POSITION_ATTRIBUTE};

/// A linked, active program with its position attribute resolved and enabled.
pub struct ShaderProgram<G: GlBackend> {
    program: G::Program,
    position_attribute: u32,
}

impl<G: GlBackend> ShaderProgram<G> {
    /// Compiles both shaders, links them, activates the program, and
    /// enables the vertex position attribute.
    ///
    /// Both shaders are compiled even when the first one fails so every
    /// diagnostic reaches the log. Linking only happens when both succeed.
    ///
    /// # Errors
    ///
    /// `ShaderCompile` for the first failing role, `ProgramLink` when linking
    /// fails, `AttributeNotFound` when the linked program has no
    /// `aVertexPosition` input.
    pub fn build(gl: &G, sources: &ShaderSources) -> Result<Self, RenderError> {
        let vertex = compile_shader(gl, ShaderRole::Vertex, sources.get(ShaderRole::Vertex));
        let fragment = compile_shader(gl, ShaderRole::Fragment, sources.get(ShaderRole::Fragment));

        let (vertex, fragment) = match (vertex, fragment) {
            (Ok(v), Ok(f)) => (v, f),
            (Err(e), Ok(f)) => {
                gl.delete_shader(f);
                return Err(e);
            }
            (Ok(v), Err(e)) => {
                gl.delete_shader(v);
                return Err(e);
            }
            (Err(e), Err(_)) => return Err(e),
        };

        let linked = link_program(gl, vertex, fragment);
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
        let program = linked?;

        gl.use_program(Some(program));
        let Some(position_attribute) = gl.attrib_location(program, POSITION_ATTRIBUTE) else {
            gl.use_program(None);
            gl.delete_program(program);
            return Err(RenderError::AttributeNotFound(POSITION_ATTRIBUTE.to_string()));
        };
        gl.enable_vertex_attrib_array(position_attribute);

        Ok(Self {
            program,
            position_attribute,
        })
    }

    pub fn program(&self) -> G::Program {
        self.program
    }

    /// Location of `aVertexPosition`.
    pub fn position_attribute(&self) -> u32 {
        self.position_attribute
    }
}

/// Compiles one shader stage.
///
/// # Errors
///
/// Returns `RenderError::ShaderCompile` with the numbered source and the
/// driver log; the failed shader object is deleted.
pub fn compile_shader<G: GlBackend + ?Sized>(
    gl: &G,
    role: ShaderRole,
    source: &str,
) -> Result<G::Shader, RenderError> {
    let shader = gl
        .create_shader(role)
        .map_err(|e| RenderError::Resource(format!("{role} shader: {e}")))?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.shader_compile_status(shader) {
        return Ok(shader);
    }

    let log = format_shader_error(source, &gl.shader_info_log(shader));
    gl.delete_shader(shader);
    log::error!("an error occurred compiling the {role} shader:\n{log}");
    Err(RenderError::ShaderCompile { role, log })
}

/// Links a vertex and fragment shader into a program.
///
/// Shaders are detached after linking whatever the outcome; the caller
/// still owns and deletes them.
///
/// # Errors
///
/// Returns `RenderError::ProgramLink` with the driver log; the program is
/// deleted.
pub fn link_program<G: GlBackend + ?Sized>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
) -> Result<G::Program, RenderError> {
    let program = gl
        .create_program()
        .map_err(|e| RenderError::Resource(format!("program: {e}")))?;

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);
    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);

    if gl.program_link_status(program) {
        return Ok(program);
    }

    let log = gl.program_info_log(program);
    gl.delete_program(program);
    log::error!("unable to initialize the shader program: {log}");
    Err(RenderError::ProgramLink(log))
}
