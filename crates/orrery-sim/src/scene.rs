//! The scene: clock, orbital parameters, starfield and camera, advanced once
//! per frame and flattened into a draw list.

use glam::Mat4;
use orrery_config::Config;

use crate::camera::{OrbitCamera, OrbitDirection};
use crate::clock::SimulationClock;
use crate::orbit::{BodyTransforms, OrbitalParams};
use crate::starfield::{Starfield, StarfieldGenerator};

/// Input gathered for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Orbit commands for held direction keys, applied in order.
    pub orbit: Vec<OrbitDirection>,
    /// Animation toggle requested this frame. Rate-limited by the clock.
    pub toggle_animation: bool,
    pub quit: bool,
}

/// Which mesh a draw command uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    Sun,
    Earth,
    Moon,
    Star,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Sun,
        ModelKind::Earth,
        ModelKind::Moon,
        ModelKind::Star,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Sun => "sun",
            ModelKind::Earth => "earth",
            ModelKind::Moon => "moon",
            ModelKind::Star => "star",
        }
    }
}

/// Which shader program a draw command uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    /// Unlit, emissive.
    Sun,
    /// Lit by the point light at the sun.
    Planet,
}

/// Draw one mesh with one world transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub model: ModelKind,
    pub shader: ShaderKind,
    pub transform: Mat4,
}

/// Everything that changes between frames, plus the fixed layout it is
/// computed from.
#[derive(Debug, Clone)]
pub struct Scene {
    clock: SimulationClock,
    params: OrbitalParams,
    starfield: Starfield,
    camera: OrbitCamera,
}

impl Scene {
    pub fn new(
        clock: SimulationClock,
        params: OrbitalParams,
        starfield: Starfield,
        camera: OrbitCamera,
    ) -> Self {
        Self {
            clock,
            params,
            starfield,
            camera,
        }
    }

    /// Build the scene described by `config`, generating the starfield.
    pub fn from_config(config: &Config) -> Self {
        let params = OrbitalParams::from(&config.scene);
        let starfield = StarfieldGenerator::from(&config.starfield).generate(&params);
        let clock = SimulationClock::new(
            config.animation.start_enabled,
            config.animation.toggle_cooldown,
        );
        log::info!(
            "Scene ready: {} stars, animation {}",
            starfield.len(),
            if clock.animation_enabled() { "on" } else { "off" }
        );
        Self::new(clock, params, starfield, OrbitCamera::from(&config.camera))
    }

    /// Advance one frame: clock first, then camera, then the toggle request.
    pub fn update(&mut self, delta_time: f32, input: &FrameInput) {
        self.clock.tick(delta_time);
        for &direction in &input.orbit {
            self.camera.orbit(direction);
        }
        if input.toggle_animation {
            self.clock.request_toggle();
        }
    }

    /// Body transforms at the current simulation time.
    pub fn transforms(&self) -> BodyTransforms {
        self.params.compute_transforms(self.clock.sim_time())
    }

    /// Sun first, then earth, moon, and every star.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let bodies = self.transforms();
        let mut commands = Vec::with_capacity(3 + self.starfield.len());

        commands.push(DrawCommand {
            model: ModelKind::Sun,
            shader: ShaderKind::Sun,
            transform: bodies.sun.model_matrix(),
        });
        commands.push(DrawCommand {
            model: ModelKind::Earth,
            shader: ShaderKind::Planet,
            transform: bodies.earth.model_matrix(),
        });
        commands.push(DrawCommand {
            model: ModelKind::Moon,
            shader: ShaderKind::Planet,
            transform: bodies.moon.model_matrix(),
        });
        commands.extend(self.starfield.transforms().map(|star| DrawCommand {
            model: ModelKind::Star,
            shader: ShaderKind::Planet,
            transform: star.model_matrix(),
        }));

        commands
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn params(&self) -> &OrbitalParams {
        &self.params
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn small_config() -> Config {
        let mut config = Config::default();
        config.starfield.count = 25;
        config
    }

    #[test]
    fn test_draw_list_order_and_count() {
        let scene = Scene::from_config(&small_config());
        let list = scene.draw_list();
        assert_eq!(list.len(), 3 + 25);
        assert_eq!(list[0].model, ModelKind::Sun);
        assert_eq!(list[0].shader, ShaderKind::Sun);
        assert_eq!(list[1].model, ModelKind::Earth);
        assert_eq!(list[2].model, ModelKind::Moon);
        assert!(list[3..].iter().all(|c| c.model == ModelKind::Star));
        assert!(list[1..].iter().all(|c| c.shader == ShaderKind::Planet));
    }

    #[test]
    fn test_reference_scene_has_800_stars() {
        let scene = Scene::from_config(&Config::default());
        assert_eq!(scene.draw_list().len(), 803);
    }

    #[test]
    fn test_update_advances_bodies() {
        let mut scene = Scene::from_config(&small_config());
        let before = scene.transforms().earth.translation;
        scene.update(0.5, &FrameInput::default());
        assert!((scene.clock().sim_time() - 0.5).abs() < 1e-6);
        assert!(scene.transforms().earth.translation.distance(before) > 1.0);
    }

    #[test]
    fn test_toggle_freezes_bodies() {
        let mut scene = Scene::from_config(&small_config());
        let toggle = FrameInput {
            toggle_animation: true,
            ..FrameInput::default()
        };
        scene.update(0.1, &toggle);
        assert!(!scene.clock().animation_enabled());
        let frozen = scene.draw_list();
        for _ in 0..10 {
            scene.update(0.05, &FrameInput::default());
        }
        assert_eq!(scene.draw_list(), frozen);
    }

    #[test]
    fn test_toggle_applies_after_time_advance() {
        let mut scene = Scene::from_config(&small_config());
        let toggle = FrameInput {
            toggle_animation: true,
            ..FrameInput::default()
        };
        // Time for this frame still accumulates before the pause takes hold.
        scene.update(0.25, &toggle);
        assert!((scene.clock().sim_time() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_input_moves_camera() {
        let mut scene = Scene::from_config(&small_config());
        let start = scene.camera().position();
        let input = FrameInput {
            orbit: vec![OrbitDirection::Right, OrbitDirection::Forward],
            ..FrameInput::default()
        };
        scene.update(0.0, &input);
        assert!(scene.camera().position().distance(start) > 0.1);
        assert_eq!(scene.camera().target(), Vec3::ZERO);
    }

    #[test]
    fn test_sun_draw_uses_sun_transform() {
        let scene = Scene::from_config(&small_config());
        let sun = scene.draw_list()[0].transform;
        let center = sun.transform_point3(Vec3::ZERO);
        assert!((center - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_model_kind_names() {
        let names: Vec<_> = ModelKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["sun", "earth", "moon", "star"]);
    }
}
