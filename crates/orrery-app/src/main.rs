//! The `orrery` binary: a small solar system on an orbiting camera.

use clap::Parser;
use orrery_app::{AppError, PlatformDirs, run};
use orrery_config::{CliArgs, Config};

fn start(args: &CliArgs) -> Result<(), AppError> {
    let dirs = PlatformDirs::resolve(args.config.as_deref())?;
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(
        config_dir = %dirs.config_dir.display(),
        width = config.window.width,
        height = config.window.height,
        vsync = config.window.vsync,
        "Starting orrery"
    );

    run(config, dirs.config_dir)
}

fn main() {
    let args = CliArgs::parse();
    if let Err(err) = start(&args) {
        tracing::error!("{err}");
        eprintln!("orrery: {err}");
        std::process::exit(1);
    }
}
