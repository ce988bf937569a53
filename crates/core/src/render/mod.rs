//! The single-frame WebGL pipeline.
//!
//! Everything here is written against [`GlBackend`], so the pipeline runs
//! unchanged on a `glow::Context` (with the `render` feature) or on a test
//! double.
//!
//! # Module overview
//!
//! - [`backend`] -- The GL call surface and its typed enums.
//! - [`context`] -- Context acquisition with legacy fallback and alert.
//! - [`program`] -- Shader compilation and program linking.
//! - [`buffer`] -- Quad vertex buffer upload.
//! - [`frame`] -- Viewport and the draw call.
//! - [`scene`] -- The owning `QuadScene` and its stage machine.
//! - `glow_backend` -- `GlBackend` for `glow::Context` (`render` feature).

pub mod backend;
pub mod buffer;
pub mod context;
pub mod frame;
pub mod program;
pub mod scene;

#[cfg(feature = "render")]
pub mod glow_backend;

#[cfg(test)]
pub(crate) mod recording;

pub use backend::{BufferUsage, Capability, ClearMask, DepthFunc, GlBackend, Primitive};
pub use buffer::QuadBuffer;
pub use context::{acquire_context, prepare_context, ContextSource, Notifier, CONTEXT_NAMES};
pub use frame::{draw_frame, Viewport};
pub use program::{compile_shader, link_program, ShaderProgram};
pub use scene::{QuadScene, Stage};
