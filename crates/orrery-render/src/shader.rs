//! Shader module loading and caching.
//!
//! The sun and planet programs are embedded in the binary. When a shader
//! directory is configured they are read from `<dir>/<name>.wgsl` instead.

use log::{debug, info};
use std::{collections::HashMap, path::PathBuf, sync::Arc};
use thiserror::Error;
use wgpu::{ShaderModuleDescriptor, ShaderSource};

use orrery_sim::ShaderKind;

/// Embedded WGSL for the emissive sun.
pub const SUN_SHADER_SOURCE: &str = include_str!("../shaders/sun.wgsl");

/// Embedded WGSL for lit bodies.
pub const PLANET_SHADER_SOURCE: &str = include_str!("../shaders/planet.wgsl");

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read shader file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("shader '{name}' not found in library")]
    NotLoaded { name: String },

    #[error("no shader directory configured for file-based loading")]
    NoShaderDir,
}

/// Library name of the program used for a [`ShaderKind`].
pub fn shader_name(kind: ShaderKind) -> &'static str {
    match kind {
        ShaderKind::Sun => "sun",
        ShaderKind::Planet => "planet",
    }
}

fn embedded_source(kind: ShaderKind) -> &'static str {
    match kind {
        ShaderKind::Sun => SUN_SHADER_SOURCE,
        ShaderKind::Planet => PLANET_SHADER_SOURCE,
    }
}

/// Named shader modules.
#[derive(Default)]
pub struct ShaderLibrary {
    modules: HashMap<String, Arc<wgpu::ShaderModule>>,
    shader_dir: Option<PathBuf>,
}

impl ShaderLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `.wgsl` files from `dir` instead of using the embedded sources.
    pub fn with_shader_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.shader_dir = Some(dir.into());
        self
    }

    /// Compile WGSL source and cache it under `name`, replacing any previous
    /// module of that name.
    pub fn load_from_source(
        &mut self,
        device: &wgpu::Device,
        name: &str,
        source: &str,
    ) -> Arc<wgpu::ShaderModule> {
        debug!("Loading shader '{}' from source", name);

        let module = Arc::new(device.create_shader_module(ShaderModuleDescriptor {
            label: Some(name),
            source: ShaderSource::Wgsl(source.into()),
        }));

        if self
            .modules
            .insert(name.to_string(), module.clone())
            .is_some()
        {
            info!("Replaced shader '{}'", name);
        } else {
            info!("Loaded shader '{}'", name);
        }
        module
    }

    /// Read `filename` from the shader directory and compile it as `name`.
    pub fn load_from_file(
        &mut self,
        device: &wgpu::Device,
        name: &str,
        filename: &str,
    ) -> Result<Arc<wgpu::ShaderModule>, ShaderError> {
        let source = self.read_source(filename)?;
        Ok(self.load_from_source(device, name, &source))
    }

    /// Load the program for every [`ShaderKind`], from the shader directory
    /// when one is set, otherwise from the embedded sources.
    pub fn load_scene_shaders(&mut self, device: &wgpu::Device) -> Result<(), ShaderError> {
        for kind in [ShaderKind::Sun, ShaderKind::Planet] {
            let name = shader_name(kind);
            if self.shader_dir.is_some() {
                self.load_from_file(device, name, &format!("{name}.wgsl"))?;
            } else {
                self.load_from_source(device, name, embedded_source(kind));
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<wgpu::ShaderModule>, ShaderError> {
        self.modules
            .get(name)
            .cloned()
            .ok_or_else(|| ShaderError::NotLoaded {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    fn read_source(&self, filename: &str) -> Result<String, ShaderError> {
        let shader_dir = self.shader_dir.as_ref().ok_or(ShaderError::NoShaderDir)?;
        let path = shader_dir.join(filename);
        debug!("Reading shader file {:?}", path);

        if !path.exists() {
            return Err(ShaderError::FileNotFound { path });
        }
        Ok(std::fs::read_to_string(&path)?)
    }
}
