//! Shader roles, embedded GLSL sources, and diagnostic formatting.
//!
//! Sources are kept in an explicit `ShaderRole -> text` mapping. Page
//! elements can override either entry; the element id naming convention
//! (`"vertex"` / `"fragment"` substrings) decides which entry an element
//! replaces.

use crate::config::SceneConfig;
use std::fmt;

/// Name of the per-vertex position attribute.
pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
/// Name of the projection matrix uniform.
pub const PROJECTION_UNIFORM: &str = "uProjectionMatrix";
/// Name of the model-view matrix uniform.
pub const MODEL_VIEW_UNIFORM: &str = "uModelViewMatrix";

/// GLSL ES 1.00 vertex shader: transforms each position by the two matrices.
pub const DEFAULT_VERTEX_SHADER: &str = r#"attribute vec4 aVertexPosition;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
}
"#;

/// GLSL ES 1.00 fragment shader: solid white.
pub const DEFAULT_FRAGMENT_SHADER: &str = r#"void main() {
    gl_FragColor = vec4(1.0, 1.0, 1.0, 1.0);
}
"#;

/// Which pipeline stage a shader belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderRole {
    Vertex,
    Fragment,
}

impl ShaderRole {
    /// Both roles in compile order.
    pub const ALL: [ShaderRole; 2] = [ShaderRole::Vertex, ShaderRole::Fragment];

    /// Infers the role from an element id: ids containing `"vertex"` are
    /// vertex shaders, ids containing `"fragment"` are fragment shaders.
    pub fn from_element_id(id: &str) -> Option<Self> {
        if id.contains("vertex") {
            Some(ShaderRole::Vertex)
        } else if id.contains("fragment") {
            Some(ShaderRole::Fragment)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShaderRole::Vertex => "vertex",
            ShaderRole::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source text for both shader roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    vertex: String,
    fragment: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// The built-in sources.
    pub fn embedded() -> Self {
        Self::new(DEFAULT_VERTEX_SHADER, DEFAULT_FRAGMENT_SHADER)
    }

    /// Starts from the embedded sources and replaces each role whose
    /// configured element yields non-blank text through `lookup`.
    ///
    /// An element id that names neither role is skipped with a warning.
    pub fn resolve<F>(config: &SceneConfig, mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut sources = Self::embedded();
        for id in [&config.vertex_shader_id, &config.fragment_shader_id] {
            let Some(role) = ShaderRole::from_element_id(id) else {
                log::warn!("cannot infer shader role from element id '{id}', ignoring it");
                continue;
            };
            match lookup(id) {
                Some(text) if !text.trim().is_empty() => {
                    log::debug!("using {role} shader source from #{id}");
                    sources.set(role, text);
                }
                _ => log::debug!("no text in #{id}, keeping embedded {role} shader"),
            }
        }
        sources
    }

    pub fn get(&self, role: ShaderRole) -> &str {
        match role {
            ShaderRole::Vertex => &self.vertex,
            ShaderRole::Fragment => &self.fragment,
        }
    }

    pub fn set(&mut self, role: ShaderRole, source: impl Into<String>) {
        match role {
            ShaderRole::Vertex => self.vertex = source.into(),
            ShaderRole::Fragment => self.fragment = source.into(),
        }
    }
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self::embedded()
    }
}

/// Formats a compiler diagnostic for human-readable debugging.
///
/// Prefixes each line of `source` with a right-aligned line number and
/// appends the driver's `log`, so driver messages such as `0:2: ...` can be
/// matched against the GLSL.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let width = lines.len().max(1).to_string().len();

    let numbered = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, _) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}
