use crate::controls::Command;
use crate::scene::camera::Movement;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

// later entries win when two of them toggle the same state in one frame
const BINDINGS: [(KeyCode, Command); 17] = [
    (KeyCode::Escape, Command::Exit),
    (KeyCode::KeyW, Command::Move(Movement::Forward)),
    (KeyCode::ArrowUp, Command::Move(Movement::Forward)),
    (KeyCode::KeyS, Command::Move(Movement::Backward)),
    (KeyCode::ArrowDown, Command::Move(Movement::Backward)),
    (KeyCode::KeyA, Command::Move(Movement::Left)),
    (KeyCode::ArrowLeft, Command::Move(Movement::Left)),
    (KeyCode::KeyD, Command::Move(Movement::Right)),
    (KeyCode::ArrowRight, Command::Move(Movement::Right)),
    (KeyCode::KeyE, Command::Move(Movement::Up)),
    (KeyCode::KeyQ, Command::Move(Movement::Down)),
    (KeyCode::KeyH, Command::ShowOverlay),
    (KeyCode::KeyJ, Command::HideOverlay),
    (KeyCode::KeyL, Command::PauseLightOrbit),
    (KeyCode::KeyK, Command::ResumeLightOrbit),
    (KeyCode::KeyP, Command::Orthographic),
    (KeyCode::KeyO, Command::Perspective),
];

/// Physical keys currently held down.
#[derive(Default)]
pub struct KeyboardState {
    pressed_keys: HashSet<KeyCode>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self { pressed_keys: HashSet::new() }
    }

    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        self.set_key_state(key, event.state);
    }

    pub fn set_key_state(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(key);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key);
            }
        }
    }

    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Commands of all held keys in binding order, each at most once.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        let mut result: Vec<Command> = Vec::new();
        for (key, command) in BINDINGS {
            if self.is_pressed(key) && !result.contains(&command) {
                result.push(command);
            }
        }
        result
    }

    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_pressed() {
        let system_under_test = KeyboardState::new();
        assert!(system_under_test.commands().is_empty());
    }

    #[test]
    fn test_press_and_release() {
        let mut system_under_test = KeyboardState::new();

        system_under_test.set_key_state(KeyCode::KeyW, ElementState::Pressed);
        assert_eq!(system_under_test.commands(), vec![Command::Move(Movement::Forward)]);

        system_under_test.set_key_state(KeyCode::KeyW, ElementState::Released);
        assert!(system_under_test.commands().is_empty());
    }

    #[test]
    fn test_letter_and_arrow_share_a_command() {
        let mut system_under_test = KeyboardState::new();

        system_under_test.set_key_state(KeyCode::KeyA, ElementState::Pressed);
        system_under_test.set_key_state(KeyCode::ArrowLeft, ElementState::Pressed);

        assert_eq!(system_under_test.commands(), vec![Command::Move(Movement::Left)]);
    }

    #[test]
    fn test_conflicting_toggles_follow_binding_order() {
        let mut system_under_test = KeyboardState::new();

        system_under_test.set_key_state(KeyCode::KeyJ, ElementState::Pressed);
        system_under_test.set_key_state(KeyCode::KeyH, ElementState::Pressed);
        system_under_test.set_key_state(KeyCode::KeyK, ElementState::Pressed);
        system_under_test.set_key_state(KeyCode::KeyL, ElementState::Pressed);

        assert_eq!(
            system_under_test.commands(),
            vec![Command::ShowOverlay, Command::HideOverlay, Command::PauseLightOrbit, Command::ResumeLightOrbit]
        );
    }

    #[test]
    fn test_vertical_and_projection_keys() {
        let mut system_under_test = KeyboardState::new();

        for key in [KeyCode::KeyQ, KeyCode::KeyE, KeyCode::KeyP, KeyCode::Escape] {
            system_under_test.set_key_state(key, ElementState::Pressed);
        }

        assert_eq!(
            system_under_test.commands(),
            vec![Command::Exit, Command::Move(Movement::Up), Command::Move(Movement::Down), Command::Orthographic]
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut system_under_test = KeyboardState::new();

        system_under_test.set_key_state(KeyCode::KeyZ, ElementState::Pressed);

        assert!(system_under_test.is_pressed(KeyCode::KeyZ));
        assert!(system_under_test.commands().is_empty());
    }

    #[test]
    fn test_release_all() {
        let mut system_under_test = KeyboardState::new();
        system_under_test.set_key_state(KeyCode::KeyD, ElementState::Pressed);

        system_under_test.release_all();

        assert!(!system_under_test.is_pressed(KeyCode::KeyD));
    }
}
