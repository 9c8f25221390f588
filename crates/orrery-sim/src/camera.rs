//! Orbit camera: circles a target point at a fixed radius in response to
//! discrete directional commands.

use glam::Vec3;
use orrery_config::CameraConfig;

/// Pitch limit keeping the camera off the poles, where the up vector flips.
const MAX_PITCH: f32 = 89.0_f32 * std::f32::consts::PI / 180.0;

/// Discrete orbit command issued while a key is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrbitDirection {
    /// Rise over the target.
    Forward,
    /// Sink under the target.
    Backward,
    Left,
    Right,
}

/// Camera on a sphere around `target`, described by yaw/pitch/radius.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
    step: f32,
    zoom_deg: f32,
}

impl OrbitCamera {
    /// Creates a camera at `position` orbiting `target` at `radius`. The
    /// direction from target to position picks the starting yaw and pitch.
    pub fn new(position: Vec3, target: Vec3, radius: f32, step_deg: f32, zoom_deg: f32) -> Self {
        let offset = position - target;
        let dir = offset.try_normalize().unwrap_or(Vec3::Z);
        Self {
            target,
            radius: radius.max(f32::EPSILON),
            yaw: dir.x.atan2(dir.z),
            pitch: dir.y.clamp(-1.0, 1.0).asin().clamp(-MAX_PITCH, MAX_PITCH),
            step: step_deg.to_radians(),
            zoom_deg,
        }
    }

    /// Applies one orbit step.
    pub fn orbit(&mut self, direction: OrbitDirection) {
        match direction {
            OrbitDirection::Forward => self.pitch += self.step,
            OrbitDirection::Backward => self.pitch -= self.step,
            OrbitDirection::Left => self.yaw -= self.step,
            OrbitDirection::Right => self.yaw += self.step,
        }
        self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw = self.yaw.rem_euclid(std::f32::consts::TAU);
    }

    /// Camera position in scene space.
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + self.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// Point the camera looks at.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Vertical field of view in degrees.
    pub fn zoom_deg(&self) -> f32 {
        self.zoom_deg
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}

impl From<&CameraConfig> for OrbitCamera {
    fn from(config: &CameraConfig) -> Self {
        Self::new(
            Vec3::from_array(config.position),
            Vec3::from_array(config.target),
            config.orbit_radius,
            config.rotate_angle_deg,
            config.zoom_deg,
        )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from(&CameraConfig::default())
    }
}
