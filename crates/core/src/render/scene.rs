//! `QuadScene` owns the context, program, and buffer, and walks the setup
//! stages once.
//!
//! ```text
//! Uninitialized -> ContextReady -> ShadersReady -> GeometryReady -> FrameDrawn
//! ```
//!
//! There are no backward transitions. A failure leaves the scene in the
//! last stage it reached; later stages never run and nothing is retried.

use super::backend::GlBackend;
use super::buffer::QuadBuffer;
use super::context::{acquire_context, prepare_context, ContextSource, Notifier};
use super::frame::{draw_frame, Viewport};
use super::program::ShaderProgram;
use crate::camera::{Camera, FrameMatrices};
use crate::config::SceneConfig;
use crate::error::RenderError;
use crate::shader::ShaderSources;

/// Setup progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Uninitialized,
    ContextReady,
    ShadersReady,
    GeometryReady,
    FrameDrawn,
}

pub struct QuadScene<G: GlBackend> {
    config: SceneConfig,
    camera: Camera,
    gl: Option<G>,
    program: Option<ShaderProgram<G>>,
    quad: Option<QuadBuffer<G>>,
    viewport: Option<Viewport>,
    stage: Stage,
    last_frame: Option<FrameMatrices>,
}

impl<G: GlBackend> QuadScene<G> {
    pub fn new(config: SceneConfig) -> Self {
        let camera = Camera::from_config(&config);
        Self {
            config,
            camera,
            gl: None,
            program: None,
            quad: None,
            viewport: None,
            stage: Stage::Uninitialized,
            last_frame: None,
        }
    }

    /// Lifecycle hook: runs [`QuadScene::initialize`] and logs a failure
    /// instead of returning it. Returns the stage reached.
    pub fn on_init<S, N>(&mut self, surface: &S, notifier: &N, sources: &ShaderSources) -> Stage
    where
        S: ContextSource<Context = G>,
        N: Notifier + ?Sized,
    {
        if let Err(e) = self.initialize(surface, notifier, sources) {
            log::error!("quad scene stopped at {:?}: {e}", self.stage);
        }
        self.stage
    }

    /// Acquires the context, builds the program, uploads the quad, and draws
    /// one frame.
    ///
    /// The viewport starts at the surface size unless [`QuadScene::resize`]
    /// already set one. A zero-sized surface still gets a context and
    /// geometry; only the draw waits for a later `resize`.
    ///
    /// Calling it again after the first run does nothing.
    ///
    /// # Errors
    ///
    /// The first stage failure. The resource that stage would have created
    /// stays `None`. A zero-sized surface stops at `GeometryReady` with
    /// `InvalidDimensions`.
    pub fn initialize<S, N>(
        &mut self,
        surface: &S,
        notifier: &N,
        sources: &ShaderSources,
    ) -> Result<(), RenderError>
    where
        S: ContextSource<Context = G>,
        N: Notifier + ?Sized,
    {
        if self.stage != Stage::Uninitialized {
            log::warn!("quad scene already initialized (stage {:?})", self.stage);
            return Ok(());
        }

        let gl = acquire_context(surface, notifier)?;
        prepare_context(&gl, self.config.clear_color);
        self.gl = Some(gl);
        self.advance(Stage::ContextReady);
        self.adopt_surface_size(surface.width(), surface.height());

        let gl = self.context()?;
        let program = ShaderProgram::build(gl, sources)?;
        self.program = Some(program);
        self.advance(Stage::ShadersReady);

        let gl = self.context()?;
        let quad = QuadBuffer::upload(gl)?;
        self.quad = Some(quad);
        self.advance(Stage::GeometryReady);

        self.draw().map(|_| ())
    }

    /// Draws the quad into the current viewport.
    ///
    /// # Errors
    ///
    /// `ContextUnavailable` or `Resource` when called before geometry is
    /// ready, `InvalidDimensions` when no usable viewport is known yet.
    pub fn draw(&mut self) -> Result<FrameMatrices, RenderError> {
        let (Some(gl), Some(program), Some(quad), Some(viewport)) =
            (&self.gl, &self.program, &self.quad, self.viewport)
        else {
            return Err(self.missing_resource());
        };
        let matrices = draw_frame(gl, program, quad, &self.camera, viewport);
        self.last_frame = Some(matrices);
        self.advance(Stage::FrameDrawn);
        Ok(matrices)
    }

    /// Viewport resize entry point for the page layout.
    ///
    /// Updates the stored viewport used by later draws and, when a context
    /// exists, applies it immediately.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for a zero side; the previous viewport is kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let viewport = Viewport::new(width, height)?;
        if let Some(gl) = &self.gl {
            viewport.apply(gl);
        }
        self.viewport = Some(viewport);
        log::debug!("viewport resized to {width}x{height}");
        Ok(())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn gl(&self) -> Option<&G> {
        self.gl.as_ref()
    }

    pub fn program(&self) -> Option<&ShaderProgram<G>> {
        self.program.as_ref()
    }

    pub fn quad(&self) -> Option<&QuadBuffer<G>> {
        self.quad.as_ref()
    }

    /// Matrices uploaded by the most recent draw.
    pub fn last_frame(&self) -> Option<FrameMatrices> {
        self.last_frame
    }

    fn adopt_surface_size(&mut self, width: u32, height: u32) {
        if let Some(pending) = self.viewport {
            log::debug!(
                "keeping {}x{} viewport from an earlier resize over the {width}x{height} surface",
                pending.width,
                pending.height
            );
            return;
        }
        match Viewport::new(width, height) {
            Ok(viewport) => self.viewport = Some(viewport),
            Err(_) => log::warn!("surface is {width}x{height}; drawing waits for a resize"),
        }
    }

    fn context(&self) -> Result<&G, RenderError> {
        self.gl.as_ref().ok_or(RenderError::ContextUnavailable {
            tried: String::new(),
        })
    }

    fn missing_resource(&self) -> RenderError {
        if self.gl.is_none() {
            RenderError::ContextUnavailable {
                tried: String::new(),
            }
        } else if self.program.is_none() {
            RenderError::Resource("shader program not built".into())
        } else if self.quad.is_none() {
            RenderError::Resource("quad buffer not uploaded".into())
        } else {
            RenderError::InvalidDimensions
        }
    }

    fn advance(&mut self, next: Stage) {
        if next > self.stage {
            log::debug!("quad scene {:?} -> {next:?}", self.stage);
            self.stage = next;
        }
    }
}

impl<G: GlBackend> Drop for QuadScene<G> {
    fn drop(&mut self) {
        let Some(gl) = &self.gl else { return };
        if let Some(quad) = &self.quad {
            gl.delete_buffer(quad.buffer());
        }
        if let Some(program) = &self.program {
            gl.delete_program(program.program());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::context::UNSUPPORTED_MESSAGE;
    use crate::render::recording::{Call, FakeSurface, RecordingGl, RecordingNotifier};
    use crate::shader::ShaderRole;

    fn init(surface: &FakeSurface) -> (QuadScene<RecordingGl>, RecordingNotifier, Stage) {
        let mut scene = QuadScene::new(SceneConfig::default());
        let notifier = RecordingNotifier::default();
        let stage = scene.on_init(surface, &notifier, &ShaderSources::embedded());
        (scene, notifier, stage)
    }

    #[test]
    fn full_sequence_reaches_frame_drawn() {
        let surface = FakeSurface::new(640, 480, &["webgl"]);
        let (scene, notifier, stage) = init(&surface);

        assert_eq!(stage, Stage::FrameDrawn);
        assert!(notifier.messages().is_empty());
        assert!(scene.program().is_some());
        assert_eq!(scene.quad().map(|q| q.len()), Some(12));

        let gl = scene.gl().unwrap();
        assert_eq!(gl.count(|c| matches!(c, Call::DrawArrays(..))), 1);
        assert!(gl.calls().contains(&Call::Viewport(0, 0, 640, 480)));
    }

    #[test]
    fn frame_uses_surface_aspect() {
        let surface = FakeSurface::new(640, 480, &["webgl"]);
        let (scene, _, _) = init(&surface);
        let frame = scene.last_frame().unwrap();
        assert_eq!(frame.projection, Camera::default().projection(640, 480));
    }

    #[test]
    fn missing_context_alerts_once_and_stops() {
        let surface = FakeSurface::new(640, 480, &[]);
        let (scene, notifier, stage) = init(&surface);

        assert_eq!(stage, Stage::Uninitialized);
        assert_eq!(notifier.messages(), vec![UNSUPPORTED_MESSAGE.to_string()]);
        assert!(scene.gl().is_none());
        assert!(scene.program().is_none());
        assert!(scene.quad().is_none());
    }

    #[test]
    fn shader_failure_halts_before_geometry() {
        let surface = FakeSurface::new(640, 480, &["webgl"])
            .with_context(|| RecordingGl::new().failing_compile(ShaderRole::Fragment));
        let (scene, notifier, stage) = init(&surface);

        assert_eq!(stage, Stage::ContextReady);
        assert!(notifier.messages().is_empty(), "shader failures are log-only");
        assert!(scene.program().is_none());
        assert!(scene.quad().is_none());

        let gl = scene.gl().unwrap();
        assert_eq!(gl.count(|c| matches!(c, Call::LinkProgram(_))), 0);
        assert_eq!(gl.count(|c| *c == Call::CreateBuffer), 0);
        assert_eq!(gl.count(|c| matches!(c, Call::DrawArrays(..))), 0);
    }

    #[test]
    fn link_failure_leaves_program_absent() {
        let surface = FakeSurface::new(640, 480, &["webgl"]).with_context(|| RecordingGl::new().failing_link());
        let (scene, _, stage) = init(&surface);
        assert_eq!(stage, Stage::ContextReady);
        assert!(scene.program().is_none());
    }

    #[test]
    fn buffer_failure_halts_before_frame() {
        let surface = FakeSurface::new(640, 480, &["webgl"]).with_context(|| RecordingGl::new().failing_buffer());
        let (scene, _, stage) = init(&surface);
        assert_eq!(stage, Stage::ShadersReady);
        assert_eq!(scene.gl().unwrap().count(|c| matches!(c, Call::DrawArrays(..))), 0);
    }

    #[test]
    fn zero_sized_surface_still_gets_a_context() {
        let surface = FakeSurface::new(0, 0, &["webgl"]);
        let mut scene = QuadScene::new(SceneConfig::default());
        let notifier = RecordingNotifier::default();
        let err = scene
            .initialize(&surface, &notifier, &ShaderSources::embedded())
            .unwrap_err();

        assert!(matches!(err, RenderError::InvalidDimensions));
        assert_eq!(surface.requested(), vec!["webgl"]);
        assert!(notifier.messages().is_empty());
        assert_eq!(scene.stage(), Stage::GeometryReady);
        assert_eq!(scene.viewport(), None);

        let gl = scene.gl().unwrap();
        assert_eq!(gl.count(|c| matches!(c, Call::ClearColor(_))), 1);
        assert_eq!(gl.count(|c| matches!(c, Call::DrawArrays(..))), 0);
    }

    #[test]
    fn zero_sized_surface_draws_after_resize() {
        let surface = FakeSurface::new(0, 480, &["webgl"]);
        let (mut scene, _, stage) = init(&surface);
        assert_eq!(stage, Stage::GeometryReady);

        scene.resize(800, 600).unwrap();
        scene.draw().unwrap();

        assert_eq!(scene.stage(), Stage::FrameDrawn);
        assert!(scene.gl().unwrap().calls().contains(&Call::Viewport(0, 0, 800, 600)));
    }

    #[test]
    fn resize_updates_subsequent_draw_viewport() {
        let surface = FakeSurface::new(640, 480, &["webgl"]);
        let (mut scene, _, _) = init(&surface);
        scene.gl().unwrap().clear_calls();

        scene.resize(800, 600).unwrap();
        scene.draw().unwrap();

        let viewports: Vec<Call> = scene
            .gl()
            .unwrap()
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Viewport(..)))
            .collect();
        assert_eq!(
            viewports,
            vec![Call::Viewport(0, 0, 800, 600), Call::Viewport(0, 0, 800, 600)]
        );
        assert_eq!(
            scene.last_frame().unwrap().projection,
            Camera::default().projection(800, 600)
        );
    }

    #[test]
    fn resize_rejects_zero_and_keeps_previous_viewport() {
        let surface = FakeSurface::new(640, 480, &["webgl"]);
        let (mut scene, _, _) = init(&surface);
        assert!(scene.resize(0, 600).is_err());
        assert_eq!(scene.viewport(), Some(Viewport::new(640, 480).unwrap()));
    }

    #[test]
    fn resize_before_init_is_stored_without_context() {
        let mut scene: QuadScene<RecordingGl> = QuadScene::new(SceneConfig::default());
        scene.resize(800, 600).unwrap();
        assert_eq!(scene.viewport(), Some(Viewport::new(800, 600).unwrap()));
        assert_eq!(scene.stage(), Stage::Uninitialized);
    }

    #[test]
    fn resize_before_init_survives_initialize() {
        let surface = FakeSurface::new(640, 480, &["webgl"]);
        let mut scene = QuadScene::new(SceneConfig::default());
        scene.resize(800, 600).unwrap();
        let stage = scene.on_init(&surface, &RecordingNotifier::default(), &ShaderSources::embedded());

        assert_eq!(stage, Stage::FrameDrawn);
        assert_eq!(scene.viewport(), Some(Viewport::new(800, 600).unwrap()));
        assert_eq!(
            scene.last_frame().unwrap().projection,
            Camera::default().projection(800, 600)
        );
        let gl = scene.gl().unwrap();
        assert!(gl.calls().contains(&Call::Viewport(0, 0, 800, 600)));
        assert!(!gl.calls().contains(&Call::Viewport(0, 0, 640, 480)));
    }

    #[test]
    fn draw_before_geometry_is_an_error() {
        let mut scene: QuadScene<RecordingGl> = QuadScene::new(SceneConfig::default());
        assert!(matches!(scene.draw(), Err(RenderError::ContextUnavailable { .. })));
    }

    #[test]
    fn second_initialize_is_a_no_op() {
        let surface = FakeSurface::new(640, 480, &["webgl"]);
        let (mut scene, notifier, _) = init(&surface);
        scene
            .initialize(&surface, &notifier, &ShaderSources::embedded())
            .unwrap();
        assert_eq!(surface.requested(), vec!["webgl"]);
        assert_eq!(scene.stage(), Stage::FrameDrawn);
    }

    #[test]
    fn drop_releases_program_and_buffer() {
        let surface = FakeSurface::new(640, 480, &["webgl"]);
        let (scene, _, _) = init(&surface);
        let log = scene.gl().unwrap().call_log();
        drop(scene);

        let calls = log.borrow();
        assert!(calls.iter().any(|c| matches!(c, Call::DeleteBuffer(_))));
        assert!(calls.iter().any(|c| matches!(c, Call::DeleteProgram(_))));
    }

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Uninitialized < Stage::ContextReady);
        assert!(Stage::GeometryReady < Stage::FrameDrawn);
    }
}
