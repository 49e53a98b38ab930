// Gamepad controller device (gilrs backend)

use super::controller::{ControllerDevice, ControllerState};
use super::host::HostInput;
use gilrs::{Axis, Button};
use glam::Vec2;

/// Left-stick deflection beyond this reads as a digital direction press
const STICK_DIRECTION_THRESHOLD: f32 = 0.35;

/// Deadzone for the analog choice stick
const CHOICE_STICK_DEADZONE: f32 = 0.2;

/// Remap an analog axis so the deadzone reads as exactly zero while the
/// remaining range still spans the full output magnitude: below `threshold`
/// the output is 0; above it, `(|v| - t) / (1 - t)` with the sign preserved.
pub fn deadzone_remap(value: f32, threshold: f32) -> f32 {
    if value.abs() > threshold {
        (value - threshold * value.signum()) / (1.0 - threshold)
    } else {
        0.0
    }
}

/// Controller device backed by one gamepad slot.
///
/// D-pad buttons and left-stick deflection both feed the digital direction
/// vector; the right stick drives the continuous choice vector. Axes are
/// converted from gilrs's y-up convention to the game's y-down screen space.
pub struct GamepadDevice {
    name: String,
    index: usize,
}

impl GamepadDevice {
    pub fn new(index: usize) -> Self {
        Self {
            name: format!("gamepad {}", index + 1),
            index,
        }
    }
}

impl ControllerDevice for GamepadDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self, host: &HostInput) -> bool {
        host.gamepad(self.index).is_some()
    }

    fn poll(&mut self, host: &HostInput, state: &mut ControllerState) {
        let Some(pad) = host.gamepad(self.index) else {
            return;
        };

        let stick_x = pad.value(Axis::LeftStickX);
        let stick_y = pad.value(Axis::LeftStickY);

        state.direction = Vec2::ZERO;
        if pad.is_pressed(Button::DPadUp) || stick_y > STICK_DIRECTION_THRESHOLD {
            state.direction.y -= 1.0;
        }
        if pad.is_pressed(Button::DPadLeft) || stick_x < -STICK_DIRECTION_THRESHOLD {
            state.direction.x -= 1.0;
        }
        if pad.is_pressed(Button::DPadDown) || stick_y < -STICK_DIRECTION_THRESHOLD {
            state.direction.y += 1.0;
        }
        if pad.is_pressed(Button::DPadRight) || stick_x > STICK_DIRECTION_THRESHOLD {
            state.direction.x += 1.0;
        }

        state.action = pad.is_pressed(Button::RightTrigger2);
        state.jump = pad.is_pressed(Button::South);

        state.choice.x = deadzone_remap(pad.value(Axis::RightStickX), CHOICE_STICK_DEADZONE);
        state.choice.y = -deadzone_remap(pad.value(Axis::RightStickY), CHOICE_STICK_DEADZONE);
    }
}
