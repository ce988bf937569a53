//! Rendering context acquisition.
//!
//! The canvas is asked for `"webgl"` first and the legacy
//! `"experimental-webgl"` second. When neither works the user gets exactly
//! one blocking alert and no context is returned.

use super::backend::{Capability, ClearMask, DepthFunc, GlBackend};
use crate::error::RenderError;

/// Context names tried in order.
pub const CONTEXT_NAMES: [&str; 2] = ["webgl", "experimental-webgl"];

/// Message shown when no context can be created.
pub const UNSUPPORTED_MESSAGE: &str = "Browser doesn't support webgl.";

/// A drawable surface with a fixed size that hands out contexts by name.
pub trait ContextSource {
    type Context: GlBackend;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Returns a context for `name`, or `None` if the surface does not
    /// support that context type.
    fn get_context(&self, name: &str) -> Option<Self::Context>;
}

/// User-visible, blocking notification (`window.alert` in the browser).
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Acquires a rendering context from `surface`, falling back through
/// [`CONTEXT_NAMES`].
///
/// # Errors
///
/// Returns `RenderError::ContextUnavailable` after alerting once through
/// `notifier` when no name yields a context.
pub fn acquire_context<S, N>(surface: &S, notifier: &N) -> Result<S::Context, RenderError>
where
    S: ContextSource,
    N: Notifier + ?Sized,
{
    for name in CONTEXT_NAMES {
        if let Some(ctx) = surface.get_context(name) {
            log::info!(
                "acquired '{name}' context for {}x{} surface",
                surface.width(),
                surface.height()
            );
            return Ok(ctx);
        }
        log::debug!("context '{name}' unavailable");
    }

    notifier.alert(UNSUPPORTED_MESSAGE);
    Err(RenderError::ContextUnavailable {
        tried: CONTEXT_NAMES.join(", "),
    })
}

/// Initial state applied right after acquisition: clear color, depth test
/// with `LEQUAL`, and a first clear.
pub fn prepare_context<G: GlBackend + ?Sized>(gl: &G, clear_color: [f32; 4]) {
    let [r, g, b, a] = clear_color;
    gl.clear_color(r, g, b, a);
    gl.enable(Capability::DepthTest);
    gl.depth_func(DepthFunc::LessOrEqual);
    gl.clear(ClearMask::COLOR_AND_DEPTH);
}
