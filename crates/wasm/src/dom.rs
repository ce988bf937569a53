//! Browser glue: canvas and shader elements looked up by id, context
//! creation through `getContext`, and `window.alert`.

use std::sync::Once;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, WebGlRenderingContext, Window};
use webgl_quad_core::render::{ContextSource, Notifier};
use webgl_quad_core::{QuadScene, RenderError, SceneConfig, ShaderSources, Stage};

static LOGGING: Once = Once::new();

/// Routes panics and `log` records to the browser console.
fn init_logging() {
    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            // another logger was installed by the host page's wasm bundle
            return;
        }
        log::debug!("logging initialized");
    });
}

struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl ContextSource for CanvasSurface {
    type Context = glow::Context;

    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn get_context(&self, name: &str) -> Option<glow::Context> {
        let object = match self.canvas.get_context(name) {
            Ok(object) => object?,
            Err(e) => {
                log::debug!("getContext('{name}') threw: {e:?}");
                return None;
            }
        };
        let webgl = object.dyn_into::<WebGlRenderingContext>().ok()?;
        Some(glow::Context::from_webgl1_context(webgl))
    }
}

struct WindowAlert {
    window: Window,
}

impl Notifier for WindowAlert {
    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed ({e:?}): {message}");
        }
    }
}

fn find_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, RenderError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| RenderError::SurfaceNotFound(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| RenderError::SurfaceNotFound(format!("{id} (not a canvas)")))
}

/// The page-facing renderer. Owns the scene for the lifetime of the page.
#[wasm_bindgen]
pub struct QuadRenderer {
    scene: QuadScene<glow::Context>,
}

#[wasm_bindgen]
impl QuadRenderer {
    /// Creates a renderer. `config_json` overrides any `SceneConfig` keys.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<QuadRenderer, JsError> {
        init_logging();
        let config = match config_json {
            Some(text) => SceneConfig::from_json_str(&text)?,
            None => SceneConfig::default(),
        };
        Ok(Self {
            scene: QuadScene::new(config),
        })
    }

    /// Runs the setup sequence and draws one frame. Returns whether the
    /// frame was drawn; failures are reported on the console (and by alert
    /// when WebGL is unsupported).
    #[wasm_bindgen(js_name = onInit)]
    pub fn on_init(&mut self) -> bool {
        let Some(window) = web_sys::window() else {
            log::error!("no global window; not running in a browser page");
            return false;
        };
        let Some(document) = window.document() else {
            log::error!("window has no document");
            return false;
        };

        let canvas = match find_canvas(&document, &self.scene.config().canvas_id) {
            Ok(canvas) => canvas,
            Err(e) => {
                log::error!("{e}");
                return false;
            }
        };
        let sources = ShaderSources::resolve(self.scene.config(), |id| {
            document.get_element_by_id(id).and_then(|el| el.text_content())
        });

        let surface = CanvasSurface { canvas };
        let notifier = WindowAlert { window };
        self.scene.on_init(&surface, &notifier, &sources) == Stage::FrameDrawn
    }

    /// Updates the viewport used by the next draw.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsError> {
        self.scene.resize(width, height)?;
        Ok(())
    }

    /// Draws the quad again into the current viewport.
    pub fn redraw(&mut self) -> Result<(), JsError> {
        self.scene.draw()?;
        Ok(())
    }

    /// Current setup stage, e.g. `"FrameDrawn"`.
    #[wasm_bindgen(getter)]
    pub fn stage(&self) -> String {
        format!("{:?}", self.scene.stage())
    }
}
