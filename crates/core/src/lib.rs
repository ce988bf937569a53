#![deny(unsafe_code)]
//! Core types for webgl-quad, a single-frame WebGL demo that draws one quad
//! in perspective.
//!
//! Provides the `Mat4` matrix type, `Camera` projection/model-view
//! constants, `SceneConfig`, embedded shader sources keyed by
//! `ShaderRole`, the quad geometry, and the [`render`] pipeline driven by
//! `QuadScene`.

pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod params;
pub mod render;
pub mod shader;

pub use camera::{Camera, FrameMatrices};
pub use config::SceneConfig;
pub use error::RenderError;
pub use math::Mat4;
pub use render::{QuadScene, Stage};
pub use shader::{ShaderRole, ShaderSources};
