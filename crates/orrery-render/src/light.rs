//! The point light at the sun.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use orrery_config::LightingConfig;

/// Light data for group 1, binding 0. 80 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    /// xyz = position, w = distance scale applied before attenuation.
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    /// rgb = specular color, w = material shininess.
    pub specular: [f32; 4],
    /// x = constant, y = linear, z = quadratic.
    pub attenuation: [f32; 4],
}

impl LightUniform {
    pub fn new(config: &LightingConfig, position: Vec3) -> Self {
        let rgb = |c: [f32; 3], w: f32| [c[0], c[1], c[2], w];
        Self {
            position: position.extend(config.distance_scale).to_array(),
            ambient: rgb(config.ambient, 0.0),
            diffuse: rgb(config.diffuse, 0.0),
            specular: rgb(config.specular, config.shininess),
            attenuation: [config.constant, config.linear, config.quadratic, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 80);
    }

    #[test]
    fn test_reference_values() {
        let light = LightUniform::new(&LightingConfig::default(), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(light.position, [0.0, -1.0, 0.0, 0.1]);
        assert_eq!(light.ambient[..3], [0.25; 3]);
        assert_eq!(light.diffuse[..3], [1.8; 3]);
        assert_eq!(light.specular, [1.0, 1.0, 1.0, 32.0]);
        assert_eq!(light.attenuation, [1.0, 0.045, 0.0075, 0.0]);
    }

    #[test]
    fn test_distance_scale_from_config() {
        let config = LightingConfig {
            distance_scale: 0.5,
            ..LightingConfig::default()
        };
        let light = LightUniform::new(&config, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.position, [1.0, 2.0, 3.0, 0.5]);
    }
}
