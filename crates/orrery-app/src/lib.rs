//! The Orrery application: window, event loop, and per-frame orchestration
//! of input, simulation and rendering.

pub mod app;
pub mod error;
pub mod models;
pub mod platform;

pub use app::{OrreryApp, run};
pub use error::AppError;
pub use platform::PlatformDirs;
