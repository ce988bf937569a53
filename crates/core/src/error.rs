//! Error types for the webgl-quad core.

use thiserror::Error;

use crate::shader::ShaderRole;

/// Errors produced while setting up or drawing the quad scene.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// Neither the primary nor the legacy context name produced a context.
    #[error("rendering context unavailable: tried {tried}")]
    ContextUnavailable {
        /// Comma-separated context names that were attempted.
        tried: String,
    },

    /// The canvas element could not be found by id.
    #[error("surface not found: #{0}")]
    SurfaceNotFound(String),

    /// A shader stage failed to compile.
    #[error("shader compile error ({role}):\n{log}")]
    ShaderCompile {
        /// The shader role that failed.
        role: ShaderRole,
        /// The driver's info log, prefixed with the numbered source.
        log: String,
    },

    /// The program failed to link.
    #[error("shader link error:\n{0}")]
    ProgramLink(String),

    /// The backend refused to create a GPU object (shader, program, buffer).
    #[error("failed to create GPU resource: {0}")]
    Resource(String),

    /// A vertex attribute is not active in the linked program.
    #[error("attribute not found in program: {0}")]
    AttributeNotFound(String),

    /// A width or height of zero was supplied for the viewport.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A scene configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
