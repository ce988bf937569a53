#![deny(unsafe_code)]
//! WASM bindings for webgl-quad.
//!
//! The page constructs a `QuadRenderer`, calls `onInit()` once the DOM is
//! ready, and forwards layout changes to `resize(width, height)`:
//!
//! ```text
//! const renderer = new QuadRenderer();          // or new QuadRenderer('{"far": 50}')
//! renderer.onInit();
//! window.addEventListener('resize', () => renderer.resize(w, h));
//! ```
//!
//! Only meaningful on `wasm32`; on other targets the crate is empty.

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::QuadRenderer;
