//! Time-driven orbital simulation: the simulation clock, per-body world
//! transforms, the decorative starfield, and the orbit camera.
//!
//! Nothing in this crate touches the GPU or the window. The renderer consumes
//! [`Scene::draw_list`] each frame.

pub mod camera;
pub mod clock;
pub mod frame;
pub mod orbit;
pub mod scene;
pub mod starfield;

pub use camera::{OrbitCamera, OrbitDirection};
pub use clock::SimulationClock;
pub use frame::FrameTimer;
pub use orbit::{BodyTransform, BodyTransforms, OrbitalParams};
pub use scene::{DrawCommand, FrameInput, ModelKind, Scene, ShaderKind};
pub use starfield::{Starfield, StarfieldGenerator};
