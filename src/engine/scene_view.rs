use std::time::Duration;

use crate::animation::{CameraTween, TransitionEngine};
use crate::assets::{LoadedTexture, TextureFetcher, TextureLoader};
use crate::camera::core::Camera;
use crate::camera::ray::Viewport;
use crate::error::OrreryError;
use crate::input::{InputEvent, InputProcessor, InputResponse};
use crate::navigation::{
    CommandOutcome, NavigationCommand, NavigationController, NavigationError,
    TransitionCompleted,
};
use crate::options::Options;
use crate::picking::{HitRegistry, Picker};
use crate::scene::{SolarSystem, TextureState};

/// What changed during one [`SceneView::update`].
#[derive(Debug, Default)]
pub struct FrameUpdate {
    /// A transition that ended on this frame.
    pub completed: Option<TransitionCompleted>,
    /// Textures that finished loading, keyed by body index, waiting for
    /// GPU upload.
    pub textures: Vec<(usize, LoadedTexture)>,
}

/// Everything about the scene except the GPU: camera, navigation, input,
/// hit testing, and texture loading.
///
/// Owned by [`SolarSystemEngine`](super::SolarSystemEngine) but usable on
/// its own, which is how the navigation flow is tested headless.
pub struct SceneView<E = CameraTween> {
    system: SolarSystem,
    camera: Camera,
    navigation: NavigationController<E>,
    input: InputProcessor,
    hits: HitRegistry,
    loader: Option<TextureLoader>,
    viewport: Viewport,
}

impl SceneView<CameraTween> {
    /// Build the scene from options, start texture loads through
    /// `fetcher`, and place the camera at its starting pose.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Scene`] if the planet or star configuration
    /// is invalid.
    pub fn new<F: TextureFetcher>(
        options: &Options,
        width: u32,
        height: u32,
        fetcher: F,
    ) -> Result<Self, OrreryError> {
        Self::with_engine(options, width, height, fetcher, CameraTween::new())
    }
}

impl<E: TransitionEngine> SceneView<E> {
    /// Like [`SceneView::new`] with a custom transition engine.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Scene`] if the planet or star configuration
    /// is invalid.
    pub fn with_engine<F: TextureFetcher>(
        options: &Options,
        width: u32,
        height: u32,
        fetcher: F,
        engine: E,
    ) -> Result<Self, OrreryError> {
        let mut system = SolarSystem::build(&options.planets, &options.stars)?;
        let navigation = NavigationController::with_engine(
            system.points().to_vec(),
            &options.navigation,
            engine,
        )?;

        let mut camera = Camera::from_options(&options.camera, 1.0);
        camera.set_viewport(width, height);

        let loader = match TextureLoader::spawn(fetcher) {
            Ok(mut loader) => {
                for (index, body) in system.bodies().iter().enumerate() {
                    loader.request(index, body.texture_source());
                }
                Some(loader)
            }
            Err(e) => {
                log::warn!("{e}; planets will not be drawn");
                for index in 0..system.bodies().len() {
                    if let Some(body) = system.body_mut(index) {
                        body.set_texture_state(TextureState::Failed);
                    }
                }
                None
            }
        };

        Ok(Self {
            system,
            camera,
            navigation,
            input: InputProcessor::new(),
            hits: HitRegistry::new(),
            loader,
            viewport: Viewport::new(width as f32, height as f32),
        })
    }

    /// Feed a raw input event through the input processor and execute the
    /// resulting command, if any.
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        let picker = Picker {
            registry: &self.hits,
            view_proj: self.camera.build_matrix(),
            viewport: self.viewport,
        };
        let response = self.input.handle_event(event, &picker);
        if let Some(command) = response.command {
            if let Err(e) = self.execute(command) {
                log::debug!("{command:?} rejected: {e}");
            }
        }
        response
    }

    /// Apply a navigation command from the camera's current position.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidIndex`] for an out-of-range
    /// `Select`.
    pub fn execute(
        &mut self,
        command: NavigationCommand,
    ) -> Result<CommandOutcome, NavigationError> {
        self.navigation.handle_command(command, self.camera.eye)
    }

    /// Advance one frame: move the camera along any transition, spin the
    /// planets, and collect finished texture loads.
    pub fn update(&mut self, dt: Duration) -> FrameUpdate {
        let completed = self.navigation.tick(dt, &mut self.camera.eye);
        self.system.spin(dt);
        FrameUpdate {
            completed,
            textures: self.drain_textures(),
        }
    }

    fn drain_textures(&mut self) -> Vec<(usize, LoadedTexture)> {
        let Some(loader) = self.loader.as_mut() else {
            return Vec::new();
        };

        let mut ready = Vec::new();
        for load in loader.poll() {
            let Some(body) = self.system.body_mut(load.index) else {
                continue;
            };
            match load.result {
                Ok(texture) => {
                    log::info!(
                        "loaded {} texture ({}x{})",
                        body.name(),
                        texture.width,
                        texture.height
                    );
                    body.set_texture_state(TextureState::Ready);
                    self.hits.register(load.index, body.bounding_sphere());
                    ready.push((load.index, texture));
                }
                Err(e) => {
                    log::warn!("{} will not be drawn: {e}", body.name());
                    body.set_texture_state(TextureState::Failed);
                }
            }
        }
        ready
    }

    /// Track a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        self.viewport = Viewport::new(width as f32, height as f32);
    }

    /// Texture requests not yet resolved.
    #[must_use]
    pub fn pending_textures(&self) -> usize {
        self.loader.as_ref().map_or(0, TextureLoader::outstanding)
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The scene model.
    #[must_use]
    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    /// The navigation controller.
    #[must_use]
    pub fn navigation(&self) -> &NavigationController<E> {
        &self.navigation
    }

    /// Bodies that can currently be clicked.
    #[must_use]
    pub fn hit_registry(&self) -> &HitRegistry {
        &self.hits
    }

    /// Surface size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::time::Instant;

    use glam::Vec3;

    use super::*;
    use crate::assets::{AssetError, MAX_TEXTURE_DIMENSION};
    use crate::options::{OrbitLayout, PlanetConfig, StarFieldOptions};

    const FRAME: Duration = Duration::from_millis(16);

    struct MemoryFetcher(HashMap<String, Vec<u8>>);

    impl TextureFetcher for MemoryFetcher {
        fn fetch(&self, source: &str) -> Result<Vec<u8>, AssetError> {
            self.0.get(source).cloned().ok_or_else(|| AssetError::Io {
                source: source.to_owned(),
                error: std::io::ErrorKind::NotFound.into(),
            })
        }
    }

    fn png() -> Vec<u8> {
        png_sized(2, 2)
    }

    fn png_sized(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([200, 100, 50, 255]),
        );
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn planet(name: &str, distance: f32) -> PlanetConfig {
        PlanetConfig {
            name: name.into(),
            radius: 100.0,
            distance,
            angle: 0.0,
            approach: 400.0,
            texture: format!("{name}.png"),
        }
    }

    /// Mercury, Venus, Earth in a line; Venus has no texture available.
    fn view() -> SceneView {
        let mut options = Options::default();
        options.planets.layout = OrbitLayout::Line;
        options.planets.list = vec![
            planet("Mercury", 2000.0),
            planet("Venus", 3000.0),
            planet("Earth", 4000.0),
        ];
        options.stars = StarFieldOptions {
            count: 16,
            seed: Some(1),
            ..StarFieldOptions::default()
        };
        options.navigation.transition_ms = 200;

        let files = HashMap::from([
            ("Mercury.png".to_owned(), png()),
            ("Earth.png".to_owned(), png()),
        ]);
        SceneView::new(&options, 800, 600, MemoryFetcher(files)).unwrap()
    }

    fn load_textures(view: &mut SceneView) -> Vec<usize> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut loaded = Vec::new();
        while view.pending_textures() > 0 && Instant::now() < deadline {
            let update = view.update(Duration::ZERO);
            loaded.extend(update.textures.into_iter().map(|(i, _)| i));
            std::thread::sleep(Duration::from_millis(1));
        }
        loaded.sort_unstable();
        loaded
    }

    fn settle(view: &mut SceneView) -> TransitionCompleted {
        for _ in 0..1000 {
            if let Some(done) = view.update(FRAME).completed {
                return done;
            }
        }
        panic!("transition never completed");
    }

    #[test]
    fn failed_texture_degrades_silently() {
        let mut view = view();
        assert_eq!(load_textures(&mut view), vec![0, 2]);

        let states: Vec<_> = view
            .system()
            .bodies()
            .iter()
            .map(|b| b.texture_state())
            .collect();
        assert_eq!(
            states,
            vec![TextureState::Ready, TextureState::Failed, TextureState::Ready]
        );
        assert!(view.hit_registry().contains(0));
        assert!(!view.hit_registry().contains(1));
        assert!(view.hit_registry().contains(2));
    }

    #[test]
    fn oversized_texture_is_delivered_within_gpu_limit() {
        let mut options = Options::default();
        options.planets.list = vec![planet("Jupiter", 2000.0)];
        options.stars.count = 0;
        let files =
            HashMap::from([("Jupiter.png".to_owned(), png_sized(16384, 2))]);
        let mut view =
            SceneView::new(&options, 800, 600, MemoryFetcher(files)).unwrap();

        let deadline = Instant::now() + Duration::from_secs(10);
        let mut textures = Vec::new();
        while textures.is_empty() && Instant::now() < deadline {
            textures = view.update(Duration::ZERO).textures;
            std::thread::sleep(Duration::from_millis(1));
        }

        let (index, texture) = &textures[0];
        assert_eq!(*index, 0);
        assert!(texture.width <= MAX_TEXTURE_DIMENSION);
        assert!(texture.height <= MAX_TEXTURE_DIMENSION);
        assert_eq!(view.system().bodies()[0].texture_state(), TextureState::Ready);
        assert!(view.hit_registry().contains(0));
    }

    #[test]
    fn scroll_flies_to_next_planet() {
        let mut view = view();
        let response = view.handle_input(InputEvent::Wheel { delta_y: 1.0 });
        assert!(response.consumed);
        assert_eq!(view.navigation().current_index(), 1);
        assert!(view.navigation().is_transitioning());

        // Ignored while in flight
        let _ = view.handle_input(InputEvent::Wheel { delta_y: 1.0 });
        assert_eq!(view.navigation().current_index(), 1);

        let done = settle(&mut view);
        assert_eq!(done.index, 1);
        assert_eq!(view.camera().eye, Vec3::new(0.0, 0.0, -2600.0));
    }

    #[test]
    fn navigation_reaches_planet_with_failed_texture() {
        let mut view = view();
        let _ = load_textures(&mut view);
        let outcome = view.execute(NavigationCommand::Select { index: 1 });
        assert!(outcome.unwrap().started());
        let _ = settle(&mut view);
        assert_eq!(view.camera().eye, view.system().points()[1].camera_position());
    }

    #[test]
    fn click_selects_loaded_planet() {
        let mut view = view();
        let _ = load_textures(&mut view);

        // Park in front of Earth, then click the middle of the screen.
        let _ = view.execute(NavigationCommand::Select { index: 2 }).unwrap();
        let _ = settle(&mut view);
        let _ = view.execute(NavigationCommand::Retreat).unwrap();
        let _ = settle(&mut view);
        assert_eq!(view.navigation().current_index(), 1);

        // Venus has no texture, so the ray passes through it to Earth.
        let _ = view.handle_input(InputEvent::Click { x: 400.0, y: 300.0 });
        assert_eq!(view.navigation().current_index(), 2);
    }

    #[test]
    fn out_of_range_select_is_rejected() {
        let mut view = view();
        let err = view.execute(NavigationCommand::Select { index: 5 });
        assert_eq!(
            err,
            Err(NavigationError::InvalidIndex { index: 5, len: 3 })
        );
        assert_eq!(view.navigation().current_index(), 0);
        assert!(!view.navigation().is_transitioning());
    }

    #[test]
    fn planets_spin_without_navigation() {
        let mut view = view();
        let _ = view.update(Duration::from_secs(1));
        for body in view.system().bodies() {
            assert!(body.rotation > 0.0);
        }
        assert_eq!(view.camera().eye, Vec3::new(0.0, 0.0, 15_000.0));
    }

    #[test]
    fn resize_updates_aspect_and_viewport() {
        let mut view = view();
        view.resize(1000, 500);
        assert_eq!(view.camera().aspect, 2.0);
        assert_eq!(view.viewport(), Viewport::new(1000.0, 500.0));
    }
}
