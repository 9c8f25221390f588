//! View and projection matrices for the orbit camera.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use orrery_sim::OrbitCamera;

/// Camera data for group 0, binding 0. 80 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = eye position, w unused.
    pub camera_pos: [f32; 4],
}

/// A perspective look-at camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera looking from the orbit camera's position at its target.
    pub fn from_orbit(orbit: &OrbitCamera, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            position: orbit.position(),
            target: orbit.target(),
            fov_y: orbit.zoom_deg().to_radians(),
            aspect_ratio,
            near,
            far,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Reverse-Z perspective: near maps to depth 1, far to 0.
    pub fn projection_matrix(&self) -> Mat4 {
        // Swapping near and far flips the depth range.
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.far, self.near)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection_matrix().to_cols_array_2d(),
            camera_pos: self.position.extend(1.0).to_array(),
        }
    }
}
