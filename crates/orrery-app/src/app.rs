//! Window, event loop and per-frame driving of the scene.
//!
//! [`OrreryApp`] implements winit's [`ApplicationHandler`]. Meshes load
//! before the event loop starts; the window, GPU context and renderer come
//! up on the first `resumed`. Each redraw samples the frame time, turns held
//! keys into a [`FrameInput`], advances the [`Scene`] and renders it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use orrery_assets::MeshData;
use orrery_config::Config;
use orrery_input::{KeyboardState, SceneBindings};
use orrery_render::{
    RenderContext, SceneRenderer, ShaderLibrary, SurfaceError, init_render_context_blocking,
};
use orrery_sim::{FrameInput, FrameTimer, ModelKind, Scene};
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::error::AppError;
use crate::models::load_scene_models;
use crate::platform::window_attributes_from_config;

/// Application state driven by the winit event loop.
pub struct OrreryApp {
    config: Config,
    scene: Scene,
    keyboard: KeyboardState,
    bindings: SceneBindings,
    timer: FrameTimer,
    start: Instant,
    meshes: HashMap<ModelKind, MeshData>,
    window: Option<Arc<Window>>,
    gpu: Option<RenderContext>,
    renderer: Option<SceneRenderer>,
    fatal: Option<AppError>,
}

impl OrreryApp {
    /// Validate the config, build the scene and load every model. Relative
    /// model paths resolve against `config_dir`.
    pub fn new(config: Config, config_dir: &Path) -> Result<Self, AppError> {
        config.validate()?;
        let meshes = load_scene_models(&config.models, config_dir)?;
        let scene = Scene::from_config(&config);
        Ok(Self {
            config,
            scene,
            keyboard: KeyboardState::new(),
            bindings: SceneBindings::default(),
            timer: FrameTimer::new(),
            start: Instant::now(),
            meshes,
            window: None,
            gpu: None,
            renderer: None,
            fatal: None,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The error that stopped the event loop, if any.
    pub fn take_fatal(&mut self) -> Option<AppError> {
        self.fatal.take()
    }

    /// Advance the simulation to `now_seconds` since start. Returns `false`
    /// when the quit key is held.
    pub fn advance(&mut self, now_seconds: f64) -> bool {
        let delta_time = self.timer.sample(now_seconds);
        let input: FrameInput = self.bindings.frame_input(&self.keyboard);
        if input.quit {
            return false;
        }
        let was_enabled = self.scene.clock().animation_enabled();
        self.scene.update(delta_time, &input);
        if self.scene.clock().animation_enabled() != was_enabled {
            info!(
                enabled = self.scene.clock().animation_enabled(),
                "Animation toggled"
            );
        }
        true
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window = Arc::new(event_loop.create_window(window_attributes_from_config(&self.config))?);
        let ctx = init_render_context_blocking(window.clone(), self.config.window.vsync)?;
        info!(
            width = ctx.size().0,
            height = ctx.size().1,
            format = ?ctx.surface_format,
            "GPU context ready"
        );

        let mut shaders = match &self.config.render.shader_dir {
            Some(dir) => ShaderLibrary::new().with_shader_dir(dir.clone()),
            None => ShaderLibrary::new(),
        };
        shaders.load_scene_shaders(&ctx.device)?;

        let renderer = SceneRenderer::new(&ctx, &shaders, &self.meshes, &self.config)?;

        self.window = Some(window);
        self.gpu = Some(ctx);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        error!("{err}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.start.elapsed().as_secs_f64();
        if !self.advance(now) {
            info!("Quit requested, shutting down");
            event_loop.exit();
            return;
        }

        let (Some(gpu), Some(renderer)) = (&self.gpu, &mut self.renderer) else {
            return;
        };
        match renderer.render(gpu, &self.scene) {
            Ok(()) => {}
            Err(SurfaceError::Timeout) => warn!("Surface timed out, skipping frame"),
            Err(err) => self.fail(event_loop, AppError::Surface(err)),
        }
    }
}

impl ApplicationHandler for OrreryApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init_graphics(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(gpu);
                    }
                    info!(width = size.width, height = size.height, "Window resized");
                }
            }
            WindowEvent::Focused(false) => {
                if self.keyboard.held_count() > 0 {
                    debug!(keys = self.keyboard.held_count(), "Focus lost, releasing held keys");
                }
                self.keyboard.release_all();
            }
            WindowEvent::KeyboardInput { event, .. } => self.keyboard.process_event(&event),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the application until the window closes or a fatal error occurs.
pub fn run(config: Config, config_dir: PathBuf) -> Result<(), AppError> {
    let mut app = OrreryApp::new(config, &config_dir)?;
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;
    match app.take_fatal() {
        Some(err) => Err(err),
        None => {
            info!(frames = app.timer.frame_count(), "Exited cleanly");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_input::RawKeyEvent;
    use winit::event::ElementState;
    use winit::keyboard::{KeyCode, PhysicalKey};

    fn app() -> OrreryApp {
        let dir = tempfile::tempdir().unwrap();
        OrreryApp::new(Config::default(), dir.path()).unwrap()
    }

    fn key(app: &mut OrreryApp, code: KeyCode, state: ElementState) {
        app.keyboard.process_raw(RawKeyEvent {
            key: PhysicalKey::Code(code),
            state,
            repeat: false,
        });
    }

    #[test]
    fn test_new_loads_all_models() {
        let app = app();
        assert_eq!(app.meshes.len(), ModelKind::ALL.len());
        assert_eq!(app.scene().draw_list().len(), 803);
    }

    #[test]
    fn test_advance_moves_simulation_time() {
        let mut app = app();
        assert!(app.advance(0.5));
        assert!((app.scene().clock().sim_time() - 0.5).abs() < 1e-6);
        assert!(app.advance(1.25));
        assert!((app.scene().clock().sim_time() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_escape_quits_without_advancing() {
        let mut app = app();
        key(&mut app, KeyCode::Escape, ElementState::Pressed);
        assert!(!app.advance(1.0));
        assert_eq!(app.scene().clock().sim_time(), 0.0);
    }

    #[test]
    fn test_held_key_orbits_camera() {
        let mut app = app();
        let yaw = app.scene().camera().yaw();
        key(&mut app, KeyCode::KeyD, ElementState::Pressed);
        assert!(app.advance(0.016));
        assert!(app.advance(0.032));
        assert!(app.scene().camera().yaw() > yaw);
    }

    #[test]
    fn test_space_toggles_animation_after_cooldown() {
        let mut app = app();
        assert!(app.scene().clock().animation_enabled());
        key(&mut app, KeyCode::Space, ElementState::Pressed);
        assert!(app.advance(1.0));
        assert!(!app.scene().clock().animation_enabled());
        let frozen = app.scene().clock().sim_time();

        key(&mut app, KeyCode::Space, ElementState::Released);
        assert!(app.advance(2.0));
        assert_eq!(app.scene().clock().sim_time(), frozen);
    }

    #[test]
    fn test_invalid_config_rejected_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.starfield.half_extent = f32::INFINITY;
        let err = OrreryApp::new(config, dir.path()).err().unwrap();
        assert!(matches!(
            err,
            AppError::Config(orrery_config::ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_run_reports_missing_model_before_window() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.models.sun = orrery_config::ModelSource::File(PathBuf::from("missing.ron"));
        let err = run(config, dir.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, AppError::Asset(_)));
    }
}
