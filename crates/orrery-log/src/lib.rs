//! Structured logging for Orrery.
//!
//! Console output with uptime timestamps and module paths, plus JSON file
//! logging in debug builds. The filter comes from `RUST_LOG` when set, then
//! from the config `debug.log_level`, then from [`DEFAULT_FILTER`].

use orrery_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config sets a level.
pub const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "orrery.log";

/// Install the global tracing subscriber.
///
/// The console layer is always on. In debug builds, when `log_dir` is given
/// and `debug.log_to_file` allows it, a JSON layer also writes
/// [`LOG_FILE_NAME`] into `log_dir`. A log file that cannot be created only
/// disables that layer.
///
/// ```no_run
/// use orrery_config::Config;
///
/// orrery_log::init_logging(None, false, Some(&Config::default()));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_string(config)));

    let console = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_timer(fmt::time::uptime());

    let wants_file = debug_build && config.is_none_or(|c| c.debug.log_to_file);
    let file = log_dir
        .filter(|_| wants_file)
        .and_then(open_log_file)
        .map(|file| {
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_timer(fmt::time::uptime())
                .json()
        });

    // `Option<Layer>` is itself a layer, so a missing file is a no-op.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();
}

fn open_log_file(log_dir: &Path) -> Option<std::fs::File> {
    std::fs::create_dir_all(log_dir).ok()?;
    std::fs::File::create(log_dir.join(LOG_FILE_NAME)).ok()
}

/// Resolve the filter directive string from the config, falling back to
/// [`DEFAULT_FILTER`] when the configured level is empty.
pub fn filter_string(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            format!("{},wgpu=warn,naga=warn", config.debug.log_level.trim())
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter_str = format!("{}", EnvFilter::new(DEFAULT_FILTER));
        assert!(filter_str.contains("wgpu=warn"));
        assert!(filter_str.contains("naga=warn"));
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_filter_string_without_config() {
        assert_eq!(filter_string(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_filter_string_from_config() {
        let mut config = Config::default();
        config.debug.log_level = "debug".to_string();
        let filter = filter_string(Some(&config));
        assert!(filter.starts_with("debug,"));
        assert!(filter.contains("wgpu=warn"));
    }

    #[test]
    fn test_empty_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "  ".to_string();
        assert_eq!(filter_string(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,orrery_sim=trace",
            "warn,orrery_render=debug",
            "error",
        ];
        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs");
        assert!(open_log_file(&log_dir).is_some());
        assert!(log_dir.join("orrery.log").is_file());
    }
}
