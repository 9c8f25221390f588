//! Held-key tracking.
//!
//! Keys are identified by [`PhysicalKey`] so the orbit keys sit in the same
//! place on every layout.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// The parts of a winit key event the tracker needs. Constructible in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub key: PhysicalKey,
    pub state: ElementState,
    /// OS auto-repeat while the key is held.
    pub repeat: bool,
}

impl From<&KeyEvent> for RawKeyEvent {
    fn from(event: &KeyEvent) -> Self {
        Self {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        }
    }
}

/// The set of physical keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<PhysicalKey>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a winit key event.
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent::from(event));
    }

    /// Record a key event. Auto-repeats are dropped; a held key already
    /// counts as pressed every frame.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                if self.held.insert(event.key) {
                    tracing::trace!(key = ?event.key, "key down");
                }
            }
            ElementState::Released => {
                if self.held.remove(&event.key) {
                    tracing::trace!(key = ?event.key, "key up");
                }
            }
        }
    }

    /// Release every held key, e.g. when the window loses focus and the
    /// release events will never arrive.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    #[must_use]
    pub fn is_pressed(&self, key: PhysicalKey) -> bool {
        self.held.contains(&key)
    }

    /// Number of keys held right now.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}
