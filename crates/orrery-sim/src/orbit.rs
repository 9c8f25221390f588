//! Orbital parameters and the per-frame body transforms derived from them.

use glam::{Mat4, Quat, Vec3};
use orrery_config::SceneConfig;

/// Translation, rotation and scale of one body in scene space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl BodyTransform {
    /// A transform with no rotation and a uniform scale.
    pub fn fixed(translation: Vec3, scale: f32) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(scale),
        }
    }

    /// Model matrix `T * R * S`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// World transforms of the named bodies at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTransforms {
    pub sun: BodyTransform,
    pub earth: BodyTransform,
    pub moon: BodyTransform,
}

/// Fixed orbital parameters of the sun, earth and moon.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalParams {
    pub sun_position: Vec3,
    pub sun_scale: f32,
    pub earth_orbit_radius: f32,
    pub earth_scale: f32,
    /// Unit-length spin axis, tilted slightly off +Y.
    pub earth_spin_axis: Vec3,
    /// Radians per simulated second.
    pub earth_spin_rate: f32,
    pub moon_orbit_radius: f32,
    pub moon_scale: f32,
}

impl OrbitalParams {
    /// Earth position relative to the sun at `sim_time`, on the X-Z plane.
    pub fn earth_offset(&self, sim_time: f32) -> Vec3 {
        Vec3::new(
            sim_time.sin() * self.earth_orbit_radius,
            0.0,
            sim_time.cos() * self.earth_orbit_radius,
        )
    }

    /// Moon position relative to the earth at `sim_time`.
    ///
    /// The moon circles on the Y-Z plane, not the earth's X-Z plane.
    pub fn moon_offset(&self, sim_time: f32) -> Vec3 {
        Vec3::new(
            0.0,
            sim_time.sin() * self.moon_orbit_radius,
            sim_time.cos() * self.moon_orbit_radius,
        )
    }

    /// Earth position at `sim_time = 0`.
    pub fn earth_initial_position(&self) -> Vec3 {
        self.sun_position + self.earth_offset(0.0)
    }

    /// Computes every body transform for `sim_time`. Pure: equal inputs give
    /// bit-identical outputs.
    pub fn compute_transforms(&self, sim_time: f32) -> BodyTransforms {
        let sun = BodyTransform::fixed(self.sun_position, self.sun_scale);

        let earth_position = self.sun_position + self.earth_offset(sim_time);
        let earth = BodyTransform {
            translation: earth_position,
            rotation: Quat::from_axis_angle(self.earth_spin_axis, sim_time * self.earth_spin_rate),
            scale: Vec3::splat(self.earth_scale),
        };

        let moon = BodyTransform::fixed(earth_position + self.moon_offset(sim_time), self.moon_scale);

        BodyTransforms { sun, earth, moon }
    }
}

impl From<&SceneConfig> for OrbitalParams {
    fn from(config: &SceneConfig) -> Self {
        Self {
            sun_position: Vec3::from_array(config.sun_position),
            sun_scale: config.sun_scale,
            earth_orbit_radius: config.earth_orbit_radius,
            earth_scale: config.earth_scale,
            earth_spin_axis: Vec3::from_array(config.earth_spin_axis).normalize_or(Vec3::Y),
            earth_spin_rate: config.earth_spin_deg_per_sec.to_radians(),
            moon_orbit_radius: config.moon_orbit_radius,
            moon_scale: config.moon_scale,
        }
    }
}

impl Default for OrbitalParams {
    fn default() -> Self {
        Self::from(&SceneConfig::default())
    }
}
