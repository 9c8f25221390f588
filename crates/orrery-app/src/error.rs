//! Application-level errors. Every variant is fatal.

use orrery_assets::AssetError;
use orrery_config::ConfigError;
use orrery_render::{RenderContextError, RendererError, ShaderError, SurfaceError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("GPU initialization failed: {0}")]
    RenderContext(#[from] RenderContextError),

    #[error("failed to load shaders: {0}")]
    Shader(#[from] ShaderError),

    #[error("failed to set up renderer: {0}")]
    Renderer(#[from] RendererError),

    #[error("failed to load model: {0}")]
    Asset(#[from] AssetError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Presentation failed mid-run and could not recover.
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("failed to create directory: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_cause() {
        let err = AppError::from(SurfaceError::OutOfMemory);
        assert_eq!(err.to_string(), "surface error: out of memory");

        let err = AppError::from(ConfigError::NoConfigDir);
        assert!(err.to_string().contains("configuration directory"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;
        let err = AppError::from(RenderContextError::NoAdapter);
        assert!(err.source().is_some());
    }
}
