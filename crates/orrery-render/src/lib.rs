//! wgpu rendering for the solar system: device and surface setup, shader
//! loading, mesh upload, and the instanced scene renderer.

pub mod buffer;
pub mod camera;
pub mod depth;
pub mod gpu;
pub mod instance;
pub mod light;
pub mod pass;
pub mod pipeline;
pub mod renderer;
pub mod shader;

#[cfg(test)]
mod test_support;

pub use buffer::{BufferAllocator, MeshBuffer, Vertex};
pub use camera::{Camera, CameraUniform};
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use instance::{DrawBatch, InstanceRaw, build_batches};
pub use light::LightUniform;
pub use pass::{FrameEncoder, RenderPassBuilder};
pub use pipeline::{MeshPipeline, SceneUniforms, UniformBinding};
pub use renderer::{RendererError, SceneRenderer};
pub use shader::{PLANET_SHADER_SOURCE, SUN_SHADER_SOURCE, ShaderError, ShaderLibrary};
