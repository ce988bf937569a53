//! Projection and model-view matrices for the single rendered frame.
//!
//! The model-view is a pure translation: the camera never rotates.

use crate::config::SceneConfig;
use crate::math::Mat4;
use glam::Vec3;

/// Fixed camera constants, taken from [`SceneConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub translation: Vec3,
}

/// The two matrices uploaded as uniforms for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub projection: Mat4,
    pub model_view: Mat4,
}

impl Camera {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            fov_y_degrees: config.fov_y_degrees,
            near: config.near,
            far: config.far,
            translation: config.camera_translation,
        }
    }

    /// Aspect ratio for a surface, `width / height`.
    pub fn aspect(width: u32, height: u32) -> f32 {
        width as f32 / height as f32
    }

    /// Perspective projection for a `width` x `height` surface.
    pub fn projection(&self, width: u32, height: u32) -> Mat4 {
        Mat4::perspective(
            self.fov_y_degrees.to_radians(),
            Self::aspect(width, height),
            self.near,
            self.far,
        )
    }

    pub fn model_view(&self) -> Mat4 {
        Mat4::translation(self.translation)
    }

    pub fn matrices(&self, width: u32, height: u32) -> FrameMatrices {
        FrameMatrices {
            projection: self.projection(width, height),
            model_view: self.model_view(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}
