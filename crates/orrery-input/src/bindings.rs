//! Key bindings for the solar system view.

use orrery_sim::{FrameInput, OrbitDirection};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::keyboard::KeyboardState;

/// Physical keys driving the scene. Defaults: W/S/D/A orbit, Space toggles
/// animation, Escape quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneBindings {
    pub orbit_forward: KeyCode,
    pub orbit_backward: KeyCode,
    pub orbit_right: KeyCode,
    pub orbit_left: KeyCode,
    pub toggle_animation: KeyCode,
    pub quit: KeyCode,
}

impl Default for SceneBindings {
    fn default() -> Self {
        Self {
            orbit_forward: KeyCode::KeyW,
            orbit_backward: KeyCode::KeyS,
            orbit_right: KeyCode::KeyD,
            orbit_left: KeyCode::KeyA,
            toggle_animation: KeyCode::Space,
            quit: KeyCode::Escape,
        }
    }
}

impl SceneBindings {
    /// Map the current key state to this frame's scene input.
    ///
    /// Orbit keys and the toggle key act every frame they are held; the
    /// simulation clock rate-limits toggles.
    pub fn frame_input(&self, keyboard: &KeyboardState) -> FrameInput {
        let held = |code: KeyCode| keyboard.is_pressed(PhysicalKey::Code(code));

        let orbit = [
            (self.orbit_forward, OrbitDirection::Forward),
            (self.orbit_backward, OrbitDirection::Backward),
            (self.orbit_right, OrbitDirection::Right),
            (self.orbit_left, OrbitDirection::Left),
        ]
        .into_iter()
        .filter(|&(code, _)| held(code))
        .map(|(_, direction)| direction)
        .collect();

        FrameInput {
            orbit,
            toggle_animation: held(self.toggle_animation),
            quit: held(self.quit),
        }
    }
}

/// [`SceneBindings::frame_input`] with the default bindings.
pub fn frame_input(keyboard: &KeyboardState) -> FrameInput {
    SceneBindings::default().frame_input(keyboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::RawKeyEvent;
    use winit::event::ElementState;

    fn press(kb: &mut KeyboardState, code: KeyCode) {
        kb.process_raw(RawKeyEvent {
            key: PhysicalKey::Code(code),
            state: ElementState::Pressed,
            repeat: false,
        });
    }

    #[test]
    fn test_no_keys_no_input() {
        assert_eq!(frame_input(&KeyboardState::new()), FrameInput::default());
    }

    #[test]
    fn test_orbit_keys_map_to_directions() {
        let cases = [
            (KeyCode::KeyW, OrbitDirection::Forward),
            (KeyCode::KeyS, OrbitDirection::Backward),
            (KeyCode::KeyD, OrbitDirection::Right),
            (KeyCode::KeyA, OrbitDirection::Left),
        ];
        for (code, direction) in cases {
            let mut kb = KeyboardState::new();
            press(&mut kb, code);
            assert_eq!(frame_input(&kb).orbit, vec![direction]);
        }
    }

    #[test]
    fn test_multiple_orbit_keys_in_fixed_order() {
        let mut kb = KeyboardState::new();
        press(&mut kb, KeyCode::KeyA);
        press(&mut kb, KeyCode::KeyW);
        assert_eq!(
            frame_input(&kb).orbit,
            vec![OrbitDirection::Forward, OrbitDirection::Left]
        );
    }

    #[test]
    fn test_held_space_requests_toggle_every_frame() {
        let mut kb = KeyboardState::new();
        press(&mut kb, KeyCode::Space);
        for _ in 0..3 {
            assert!(frame_input(&kb).toggle_animation);
        }
    }

    #[test]
    fn test_escape_requests_quit() {
        let mut kb = KeyboardState::new();
        press(&mut kb, KeyCode::Escape);
        let input = frame_input(&kb);
        assert!(input.quit);
        assert!(input.orbit.is_empty());
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = SceneBindings {
            toggle_animation: KeyCode::KeyP,
            ..SceneBindings::default()
        };
        let mut kb = KeyboardState::new();
        press(&mut kb, KeyCode::Space);
        assert!(!bindings.frame_input(&kb).toggle_animation);
        press(&mut kb, KeyCode::KeyP);
        assert!(bindings.frame_input(&kb).toggle_animation);
    }
}
