//! Decorative starfield: points scattered in a cube around the sun, kept clear
//! of the sun and of the earth's starting position.
//!
//! Generated once at startup by rejection sampling. Each star gets a bounded
//! number of attempts; when they run out, a deterministic point outside both
//! exclusion spheres is used instead.

use glam::Vec3;
use orrery_config::StarfieldConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::orbit::{BodyTransform, OrbitalParams};

/// Immutable star positions plus their shared model scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    positions: Vec<Vec3>,
    scale: f32,
}

impl Starfield {
    /// Star centers in scene space.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the starfield has no stars.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Per-star transforms. These never change between frames.
    pub fn transforms(&self) -> impl Iterator<Item = BodyTransform> + '_ {
        self.positions
            .iter()
            .map(|&p| BodyTransform::fixed(p, self.scale))
    }
}

/// Generates a [`Starfield`]. Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct StarfieldGenerator {
    seed: u64,
    star_count: u32,
    half_extent: f32,
    exclusion_radius: f32,
    star_scale: f32,
    max_attempts: u32,
}

impl StarfieldGenerator {
    /// Generate the starfield around the bodies described by `params`.
    pub fn generate(&self, params: &OrbitalParams) -> Starfield {
        let center = params.sun_position;
        let earth = params.earth_initial_position();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut positions = Vec::with_capacity(self.star_count as usize);
        let mut fallbacks = 0u32;

        for index in 0..self.star_count {
            let sampled = (0..self.max_attempts).find_map(|_| {
                let candidate = center + self.sample_offset(&mut rng);
                self.is_clear(candidate, center, earth).then_some(candidate)
            });

            let position = sampled.unwrap_or_else(|| {
                fallbacks += 1;
                self.fallback_position(index, center, earth)
            });
            positions.push(position);
        }

        if fallbacks > 0 {
            log::warn!(
                "Starfield: {fallbacks}/{} stars used fallback placement after {} attempts",
                self.star_count,
                self.max_attempts
            );
        }
        log::debug!("Generated {} stars (seed {})", positions.len(), self.seed);

        Starfield {
            positions,
            scale: self.star_scale,
        }
    }

    fn sample_offset(&self, rng: &mut ChaCha8Rng) -> Vec3 {
        let h = self.half_extent;
        if h == 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new(
            rng.random_range(-h..h),
            rng.random_range(-h..h),
            rng.random_range(-h..h),
        )
    }

    fn is_clear(&self, candidate: Vec3, sun: Vec3, earth: Vec3) -> bool {
        candidate.distance(sun) >= self.exclusion_radius
            && candidate.distance(earth) >= self.exclusion_radius
    }

    /// A point on a golden-spiral direction at distance `|earth - sun| + 2r`
    /// from the sun: at least `r` from the sun and, by the triangle
    /// inequality, at least `2r` from the earth.
    fn fallback_position(&self, index: u32, sun: Vec3, earth: Vec3) -> Vec3 {
        let n = self.star_count.max(1) as f32;
        let i = index as f32 + 0.5;
        let y = 1.0 - 2.0 * i / n;
        let ring = (1.0 - y * y).max(0.0).sqrt();
        let theta = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt()) * index as f32;
        let direction = Vec3::new(ring * theta.cos(), y, ring * theta.sin());

        let distance = sun.distance(earth) + 2.0 * self.exclusion_radius;
        sun + direction * distance
    }
}

impl From<&StarfieldConfig> for StarfieldGenerator {
    fn from(config: &StarfieldConfig) -> Self {
        Self {
            seed: config.seed,
            star_count: config.count,
            half_extent: sampling_extent(config.half_extent),
            exclusion_radius: finite_or_zero(config.exclusion_radius),
            star_scale: config.star_scale,
            max_attempts: config.max_attempts,
        }
    }
}

/// A usable cube half-width, or 0 when `-h..h` cannot be sampled. A zero
/// extent puts every candidate on the sun, so all stars come from the
/// fallback unless the exclusion radius is also 0.
fn sampling_extent(half_extent: f32) -> f32 {
    let h = half_extent.abs();
    if (2.0 * h).is_finite() { h } else { 0.0 }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
