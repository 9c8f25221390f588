//! Directory layout and window attributes.

use std::path::{Path, PathBuf};

use orrery_config::Config;
use winit::window::WindowAttributes;

use crate::error::AppError;

/// Where the config file and logs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`. Relative model paths resolve against it.
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Use `override_dir` when given, otherwise the platform config dir.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self, AppError> {
        let config_dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => Config::default_dir()?,
        };
        Ok(Self::rooted_at(config_dir))
    }

    /// Directories under `config_dir`, without touching the filesystem.
    pub fn rooted_at(config_dir: PathBuf) -> Self {
        let log_dir = Config::log_dir(&config_dir);
        Self {
            config_dir,
            log_dir,
        }
    }

    /// Create both directories on disk.
    pub fn create_dirs(&self) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

/// Window title and logical size from config.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            f64::from(config.window.width.max(1)),
            f64::from(config.window.height.max(1)),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_dir_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve(Some(dir.path())).unwrap();
        assert_eq!(dirs.config_dir, dir.path());
        assert_eq!(dirs.log_dir, dir.path().join("logs"));
    }

    #[test]
    fn test_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::rooted_at(dir.path().join("nested").join("orrery"));
        assert!(!dirs.config_dir.exists());
        dirs.create_dirs().unwrap();
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }

    #[test]
    fn test_window_attributes_use_config() {
        let config = Config::default();
        let attrs = window_attributes_from_config(&config);
        assert_eq!(attrs.title, "Solar System");
        assert_eq!(
            attrs.inner_size,
            Some(winit::dpi::Size::Logical(winit::dpi::LogicalSize::new(
                1080.0, 720.0
            )))
        );
    }
}
