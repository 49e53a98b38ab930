// Keyboard controller device

use super::controller::{ControllerDevice, ControllerState};
use super::host::HostInput;
use glam::Vec2;
use winit::keyboard::KeyCode;

/// Magnitude a choice key contributes; keyboards cannot express the full
/// analog range, so they report a fixed partial deflection
const CHOICE_KEY_MAGNITUDE: f32 = 0.7;

/// The nine logical inputs a keyboard layout maps: four directions, two
/// choice-axis keys, jump, and two alternate action keys
#[derive(Debug, Clone, Copy)]
pub struct KeyboardLayout {
    pub up: KeyCode,
    pub left: KeyCode,
    pub down: KeyCode,
    pub right: KeyCode,
    pub choice_left: KeyCode,
    pub choice_right: KeyCode,
    pub jump: KeyCode,
    pub action: KeyCode,
    pub action_alt: KeyCode,
}

impl KeyboardLayout {
    /// Primary layout: WASD movement, Q/E choice, space jump, shift action
    pub fn wasd() -> Self {
        Self {
            up: KeyCode::KeyW,
            left: KeyCode::KeyA,
            down: KeyCode::KeyS,
            right: KeyCode::KeyD,
            choice_left: KeyCode::KeyQ,
            choice_right: KeyCode::KeyE,
            jump: KeyCode::Space,
            action: KeyCode::ShiftLeft,
            action_alt: KeyCode::ShiftRight,
        }
    }

    /// Secondary layout for a second person on the same keyboard:
    /// IJKL movement, U/O choice, alt jump, B/N action
    pub fn ijkl() -> Self {
        Self {
            up: KeyCode::KeyI,
            left: KeyCode::KeyJ,
            down: KeyCode::KeyK,
            right: KeyCode::KeyL,
            choice_left: KeyCode::KeyU,
            choice_right: KeyCode::KeyO,
            jump: KeyCode::AltLeft,
            action: KeyCode::KeyB,
            action_alt: KeyCode::KeyN,
        }
    }
}

/// Controller device backed by keyboard key states
pub struct KeyboardDevice {
    name: String,
    layout: KeyboardLayout,
}

impl KeyboardDevice {
    pub fn new(name: &str, layout: KeyboardLayout) -> Self {
        Self {
            name: name.to_string(),
            layout,
        }
    }
}

impl ControllerDevice for KeyboardDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self, _host: &HostInput) -> bool {
        // A keyboard is always attached
        true
    }

    fn poll(&mut self, host: &HostInput, state: &mut ControllerState) {
        let keys = self.layout;

        state.direction = Vec2::ZERO;
        if host.is_key_down(keys.up) {
            state.direction.y -= 1.0;
        }
        if host.is_key_down(keys.left) {
            state.direction.x -= 1.0;
        }
        if host.is_key_down(keys.down) {
            state.direction.y += 1.0;
        }
        if host.is_key_down(keys.right) {
            state.direction.x += 1.0;
        }

        state.action = host.is_key_down(keys.action) || host.is_key_down(keys.action_alt);
        state.jump = host.is_key_down(keys.jump);

        state.choice = Vec2::ZERO;
        if host.is_key_down(keys.choice_left) {
            state.choice.x -= CHOICE_KEY_MAGNITUDE;
        }
        if host.is_key_down(keys.choice_right) {
            state.choice.x += CHOICE_KEY_MAGNITUDE;
        }
    }
}
