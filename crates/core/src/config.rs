//! Scene configuration: element ids, camera constants, and clear color.
//!
//! Every field has a default matching the stock demo page, so an empty JSON
//! object (or no config at all) reproduces the stock demo page.

use crate::error::RenderError;
use crate::params::{param_f32, param_f32_array, param_string};
use glam::Vec3;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Default id of the canvas element.
pub const DEFAULT_CANVAS_ID: &str = "glCanvas";
/// Default id of the element holding vertex shader text.
pub const DEFAULT_VERTEX_SHADER_ID: &str = "shader-vertex";
/// Default id of the element holding fragment shader text.
pub const DEFAULT_FRAGMENT_SHADER_ID: &str = "shader-fragment";
/// Default vertical field of view.
pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;
/// Default near clip plane.
pub const DEFAULT_NEAR: f32 = 0.1;
/// Default far clip plane.
pub const DEFAULT_FAR: f32 = 100.0;
/// Default camera translation (pulls the quad 6 units into the screen).
pub const DEFAULT_CAMERA_TRANSLATION: [f32; 3] = [0.0, 0.0, -6.0];
/// Default clear color: opaque black.
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Everything the scene needs besides the GL context itself.
///
/// Deserializing goes through [`SceneConfig::from_json`], so a config read
/// with serde is validated the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneConfig {
    pub canvas_id: String,
    pub vertex_shader_id: String,
    pub fragment_shader_id: String,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_translation: Vec3,
    pub clear_color: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_owned(),
            vertex_shader_id: DEFAULT_VERTEX_SHADER_ID.to_owned(),
            fragment_shader_id: DEFAULT_FRAGMENT_SHADER_ID.to_owned(),
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            camera_translation: Vec3::from_array(DEFAULT_CAMERA_TRANSLATION),
            clear_color: DEFAULT_CLEAR_COLOR,
        }
    }
}

impl SceneConfig {
    /// Reads a config from a JSON object, falling back to defaults for
    /// missing or mistyped keys, then validates the result.
    pub fn from_json(params: &Value) -> Result<Self, RenderError> {
        let config = Self {
            canvas_id: param_string(params, "canvas_id", DEFAULT_CANVAS_ID),
            vertex_shader_id: param_string(params, "vertex_shader_id", DEFAULT_VERTEX_SHADER_ID),
            fragment_shader_id: param_string(
                params,
                "fragment_shader_id",
                DEFAULT_FRAGMENT_SHADER_ID,
            ),
            fov_y_degrees: param_f32(params, "fov_y_degrees", DEFAULT_FOV_Y_DEGREES),
            near: param_f32(params, "near", DEFAULT_NEAR),
            far: param_f32(params, "far", DEFAULT_FAR),
            camera_translation: Vec3::from_array(param_f32_array(
                params,
                "camera_translation",
                DEFAULT_CAMERA_TRANSLATION,
            )),
            clear_color: param_f32_array(params, "clear_color", DEFAULT_CLEAR_COLOR),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON string and delegates to [`SceneConfig::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, RenderError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| RenderError::InvalidConfig(format!("malformed JSON: {e}")))?;
        Self::from_json(&value)
    }

    /// Checks the projection constants are usable.
    ///
    /// JSON numbers beyond `f32` range arrive here as infinities, so every
    /// numeric field must be finite.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.near.is_finite() || self.near <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "near must be positive, got {}",
                self.near
            )));
        }
        if !self.far.is_finite() || self.far <= self.near {
            return Err(RenderError::InvalidConfig(format!(
                "far ({}) must be finite and exceed near ({})",
                self.far, self.near
            )));
        }
        if !self.fov_y_degrees.is_finite() || self.fov_y_degrees <= 0.0 || self.fov_y_degrees >= 180.0 {
            return Err(RenderError::InvalidConfig(format!(
                "fov_y_degrees must be in (0, 180), got {}",
                self.fov_y_degrees
            )));
        }
        if !self.camera_translation.is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "camera_translation must be finite, got {}",
                self.camera_translation
            )));
        }
        if self.clear_color.iter().any(|c| !c.is_finite()) {
            return Err(RenderError::InvalidConfig(format!(
                "clear_color must be finite, got {:?}",
                self.clear_color
            )));
        }
        if self.canvas_id.is_empty() {
            return Err(RenderError::InvalidConfig("canvas_id is empty".into()));
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for SceneConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("scene config must be a JSON object"));
        }
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
