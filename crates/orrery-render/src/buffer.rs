//! Vertex and index buffers for uploaded meshes.

use bytemuck::{Pod, Zeroable};
use orrery_assets::MeshData;
use wgpu::util::DeviceExt;

/// Per-vertex data: position, normal, and the mesh color.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 24,
                shader_location: 2,
            },
        ],
    };
}

/// Interleave a mesh into GPU vertices.
pub fn mesh_vertices(mesh: &MeshData) -> Vec<Vertex> {
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .map(|(&position, &normal)| Vertex {
            position,
            normal,
            color: mesh.color,
        })
        .collect()
}

/// An uploaded mesh.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffer {
    /// Bind to vertex slot 0 and the index slot.
    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    }

    /// Draw every index for the given instance range.
    pub fn draw_instanced(&self, render_pass: &mut wgpu::RenderPass<'_>, instances: std::ops::Range<u32>) {
        render_pass.draw_indexed(0..self.index_count, 0, instances);
    }
}

/// Creates mesh buffers on a device.
pub struct BufferAllocator<'a> {
    device: &'a wgpu::Device,
}

impl<'a> BufferAllocator<'a> {
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self { device }
    }

    /// Upload a validated mesh.
    pub fn create_mesh(&self, label: &str, mesh: &MeshData) -> MeshBuffer {
        let vertices = mesh_vertices(mesh);
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label}-vertices")),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label}-indices")),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        log::debug!(
            "Uploaded mesh '{label}': {} vertices, {} indices",
            vertices.len(),
            mesh.indices.len()
        );

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_device;
    use orrery_assets::generate_icosphere;

    #[test]
    fn test_vertex_size_matches_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 40);
        assert_eq!(Vertex::LAYOUT.array_stride, 40);
        assert_eq!(Vertex::LAYOUT.step_mode, wgpu::VertexStepMode::Vertex);
        let locations: Vec<_> = Vertex::LAYOUT
            .attributes
            .iter()
            .map(|a| a.shader_location)
            .collect();
        assert_eq!(locations, [0, 1, 2]);
    }

    #[test]
    fn test_mesh_vertices_carry_color() {
        let mut mesh = generate_icosphere(0, 2.0);
        mesh.color = [0.2, 0.4, 0.6, 1.0];
        let vertices = mesh_vertices(&mesh);
        assert_eq!(vertices.len(), 12);
        assert!(vertices.iter().all(|v| v.color == [0.2, 0.4, 0.6, 1.0]));
        assert_eq!(vertices[3].position, mesh.positions[3]);
        assert_eq!(vertices[3].normal, mesh.normals[3]);
    }

    #[test]
    fn test_create_mesh_index_count() {
        let Some((device, _queue)) = create_test_device() else {
            return;
        };
        let mesh = generate_icosphere(1, 1.0);
        let buffer = BufferAllocator::new(&device).create_mesh("test", &mesh);
        assert_eq!(buffer.index_count, 240);
        assert_eq!(buffer.vertex_buffer.size(), 42 * 40);
    }
}
