//! Draws a [`Scene`] each frame.

use std::collections::HashMap;

use orrery_assets::MeshData;
use orrery_config::Config;
use orrery_sim::{ModelKind, Scene, ShaderKind};

use crate::buffer::{BufferAllocator, MeshBuffer};
use crate::camera::Camera;
use crate::depth::DepthBuffer;
use crate::gpu::{RenderContext, SurfaceError};
use crate::instance::{InstanceRaw, build_batches, grown_capacity};
use crate::light::LightUniform;
use crate::pass::{FrameEncoder, RenderPassBuilder, clear_color_from_rgb};
use crate::pipeline::{MeshPipeline, SceneUniforms};
use crate::shader::{ShaderError, ShaderLibrary, shader_name};

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("no mesh provided for model '{}'", .0.name())]
    MissingMesh(ModelKind),

    #[error(transparent)]
    Shader(#[from] ShaderError),
}

/// Owns the GPU resources for the scene: meshes, pipelines, uniforms, the
/// instance buffer and the depth buffer.
pub struct SceneRenderer {
    meshes: HashMap<ModelKind, MeshBuffer>,
    sun_pipeline: MeshPipeline,
    planet_pipeline: MeshPipeline,
    uniforms: SceneUniforms,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    depth: DepthBuffer,
    pass: RenderPassBuilder,
    lighting: orrery_config::LightingConfig,
    near: f32,
    far: f32,
}

impl SceneRenderer {
    /// Upload one mesh per [`ModelKind`] and build both pipelines from the
    /// loaded shader library.
    pub fn new(
        ctx: &RenderContext,
        shaders: &ShaderLibrary,
        meshes: &HashMap<ModelKind, MeshData>,
        config: &Config,
    ) -> Result<Self, RendererError> {
        let device = &ctx.device;
        let allocator = BufferAllocator::new(device);
        let mut uploaded = HashMap::with_capacity(ModelKind::ALL.len());
        for kind in ModelKind::ALL {
            let mesh = meshes.get(&kind).ok_or(RendererError::MissingMesh(kind))?;
            uploaded.insert(kind, allocator.create_mesh(kind.name(), mesh));
        }

        let near = config.render.near;
        let far = config.render.far;
        let camera = Camera::from_orbit(
            &orrery_sim::OrbitCamera::from(&config.camera),
            ctx.aspect_ratio(),
            near,
            far,
        );
        let light = LightUniform::new(
            &config.lighting,
            glam::Vec3::from_array(config.scene.sun_position),
        );
        let uniforms = SceneUniforms::new(device, &camera.to_uniform(), &light);

        let sun_shader = shaders.get(shader_name(ShaderKind::Sun))?;
        let planet_shader = shaders.get(shader_name(ShaderKind::Planet))?;
        let sun_pipeline = MeshPipeline::new(device, "sun", &sun_shader, ctx.surface_format, &uniforms);
        let planet_pipeline =
            MeshPipeline::new(device, "planet", &planet_shader, ctx.surface_format, &uniforms);

        let instance_capacity = grown_capacity(0, 3 + config.starfield.count as usize);
        let instance_buffer = create_instance_buffer(device, instance_capacity);

        let (width, height) = ctx.size();
        let depth = DepthBuffer::new(device, width, height);

        let pass = RenderPassBuilder::new()
            .clear_color(clear_color_from_rgb(config.render.clear_color))
            .depth(DepthBuffer::CLEAR_VALUE)
            .label("scene-pass");

        log::info!(
            "Scene renderer ready ({} models, instance capacity {})",
            uploaded.len(),
            instance_capacity
        );

        Ok(Self {
            meshes: uploaded,
            sun_pipeline,
            planet_pipeline,
            uniforms,
            instance_buffer,
            instance_capacity,
            depth,
            pass,
            lighting: config.lighting.clone(),
            near,
            far,
        })
    }

    /// Match the depth buffer to a resized surface.
    pub fn resize(&mut self, ctx: &RenderContext) {
        let (width, height) = ctx.size();
        self.depth.resize(&ctx.device, width, height);
    }

    /// Upload this frame's uniforms and instances, draw the scene, present.
    pub fn render(&mut self, ctx: &RenderContext, scene: &Scene) -> Result<(), SurfaceError> {
        let camera = Camera::from_orbit(scene.camera(), ctx.aspect_ratio(), self.near, self.far);
        self.uniforms.camera.write(&ctx.queue, &camera.to_uniform());
        let light = LightUniform::new(&self.lighting, scene.transforms().sun.translation);
        self.uniforms.light.write(&ctx.queue, &light);

        let (instances, batches) = build_batches(&scene.draw_list());
        self.ensure_instance_capacity(&ctx.device, instances.len());
        if !instances.is_empty() {
            ctx.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let surface_texture = ctx.get_current_texture()?;
        let mut frame = FrameEncoder::new(&ctx.device, surface_texture);
        {
            let mut pass = frame.begin_render_pass(&self.pass, Some(&self.depth.view));
            self.uniforms.bind(&mut pass);
            pass.set_vertex_buffer(1, self.instance_buffer.slice(..));

            for batch in &batches {
                // wgpu rejects empty buffer slices.
                let Some(mesh) = self.meshes.get(&batch.model).filter(|m| m.index_count > 0)
                else {
                    continue;
                };
                let pipeline = match batch.shader {
                    ShaderKind::Sun => &self.sun_pipeline,
                    ShaderKind::Planet => &self.planet_pipeline,
                };
                pass.set_pipeline(&pipeline.pipeline);
                mesh.bind(&mut pass);
                mesh.draw_instanced(&mut pass, batch.instances.clone());
            }
        }
        frame.submit(&ctx.queue);
        Ok(())
    }

    fn ensure_instance_capacity(&mut self, device: &wgpu::Device, required: usize) {
        let capacity = grown_capacity(self.instance_capacity, required);
        if capacity != self.instance_capacity {
            log::debug!(
                "Growing instance buffer {} -> {}",
                self.instance_capacity,
                capacity
            );
            self.instance_buffer = create_instance_buffer(device, capacity);
            self.instance_capacity = capacity;
        }
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance-buffer"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
