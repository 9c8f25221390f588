//! Per-instance model matrices and the batching of draw commands into
//! instanced draws.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use orrery_sim::{DrawCommand, ModelKind, ShaderKind};

/// One model matrix, column-major, at vertex locations 3..=6.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl InstanceRaw {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 0,
                shader_location: 3,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 16,
                shader_location: 4,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 32,
                shader_location: 5,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 48,
                shader_location: 6,
            },
        ],
    };
}

impl From<Mat4> for InstanceRaw {
    fn from(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// A run of consecutive draw commands sharing mesh and shader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawBatch {
    pub model: ModelKind,
    pub shader: ShaderKind,
    /// Range into the frame's instance buffer.
    pub instances: Range<u32>,
}

/// Flatten a draw list into instance data plus one batch per run of equal
/// `(model, shader)`. Draw order is preserved.
pub fn build_batches(commands: &[DrawCommand]) -> (Vec<InstanceRaw>, Vec<DrawBatch>) {
    let mut instances = Vec::with_capacity(commands.len());
    let mut batches: Vec<DrawBatch> = Vec::new();

    for (i, command) in commands.iter().enumerate() {
        instances.push(InstanceRaw::from(command.transform));
        let index = i as u32;
        match batches.last_mut() {
            Some(batch) if batch.model == command.model && batch.shader == command.shader => {
                batch.instances.end = index + 1;
            }
            _ => batches.push(DrawBatch {
                model: command.model,
                shader: command.shader,
                instances: index..index + 1,
            }),
        }
    }

    (instances, batches)
}

/// Instance capacity to allocate for `required` instances when `current`
/// is not enough: the next power of two, at least 64.
pub fn grown_capacity(current: usize, required: usize) -> usize {
    if required <= current {
        current
    } else {
        required.next_power_of_two().max(64)
    }
}
