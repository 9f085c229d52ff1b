use std::time::Duration;

use super::scene_view::SceneView;
use crate::assets::DefaultFetcher;
use crate::error::OrreryError;
use crate::gpu::render_context::RenderContext;
use crate::input::{InputEvent, InputResponse};
use crate::navigation::{
    CommandOutcome, NavigationCommand, NavigationError, TransitionCompleted,
};
use crate::options::Options;
use crate::renderer::Renderer;
use crate::util::frame_timing::FrameClock;

/// The full application core: GPU context and renderer around a
/// [`SceneView`].
///
/// A host drives it with [`handle_input`](Self::handle_input) for each
/// window event, then [`update`](Self::update) and
/// [`render`](Self::render) once per redraw.
pub struct SolarSystemEngine {
    context: RenderContext,
    renderer: Renderer,
    view: SceneView,
    /// Frame delta measurement and FPS.
    pub frame_timing: FrameClock,
}

impl SolarSystemEngine {
    /// Initialize the GPU for `window`, build the scene, and start loading
    /// planet textures.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Gpu`] if the GPU context cannot be created,
    /// or [`OrreryError::Scene`] if the configuration is invalid.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: &Options,
    ) -> Result<Self, OrreryError> {
        let context = RenderContext::new(window, size).await?;
        let (width, height) = context.size();
        let view = SceneView::new(options, width, height, DefaultFetcher)?;
        let renderer = Renderer::new(&context, view.system());

        Ok(Self {
            context,
            renderer,
            view,
            frame_timing: FrameClock::new(),
        })
    }

    /// Route a window event through input handling and navigation.
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        self.view.handle_input(event)
    }

    /// Issue a navigation command directly.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidIndex`] for an out-of-range
    /// `Select`.
    pub fn execute(
        &mut self,
        command: NavigationCommand,
    ) -> Result<CommandOutcome, NavigationError> {
        self.view.execute(command)
    }

    /// Advance by the wall-clock time since the previous frame.
    pub fn update(&mut self) -> Option<TransitionCompleted> {
        let dt = self.frame_timing.tick();
        self.update_by(dt)
    }

    /// Advance by an explicit delta and upload any textures that arrived.
    pub fn update_by(&mut self, dt: Duration) -> Option<TransitionCompleted> {
        let frame = self.view.update(dt);
        for (index, texture) in &frame.textures {
            self.renderer.attach_texture(
                &self.context,
                self.view.system(),
                *index,
                texture,
            );
        }
        frame.completed
    }

    /// Draw the current frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture could not be
    /// acquired. `Lost` and `Outdated` are recovered by reconfiguring; the
    /// caller may simply retry next frame.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let result =
            self.renderer
                .render(&self.context, self.view.camera(), self.view.system());
        if let Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) =
            result
        {
            self.context.reconfigure();
        }
        result
    }

    /// Resize the surface, depth buffer, and camera projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.renderer.resize(&self.context.device, width, height);
        self.view.resize(width, height);
    }

    /// The GPU-independent scene state.
    #[must_use]
    pub fn view(&self) -> &SceneView {
        &self.view
    }
}
