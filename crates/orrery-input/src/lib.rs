//! Keyboard input: frame-coherent key state and the fixed key bindings that
//! turn it into scene input.

pub mod bindings;
pub mod keyboard;

pub use bindings::{SceneBindings, frame_input};
pub use keyboard::{KeyboardState, RawKeyEvent};
