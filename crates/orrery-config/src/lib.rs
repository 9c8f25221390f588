//! Orrery settings: a RON file in the platform config directory, with
//! defaults for every field and clap flags layered on top.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, CameraConfig, Config, DebugConfig, LightingConfig, ModelSource,
    ModelsConfig, RenderConfig, SceneConfig, StarfieldConfig, WindowConfig,
};
pub use error::ConfigError;
