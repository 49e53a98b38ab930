// Controller manager: device preference list, selection, edge detection

use super::controller::{ControllerDevice, ControllerState, DisabledDevice};
use super::gamepad::GamepadDevice;
use super::host::HostInput;
use super::keyboard::{KeyboardDevice, KeyboardLayout};
use log::info;

/// How many gamepad slots sit at the front of the preference list
const GAMEPAD_SLOTS: usize = 4;

/// Owns the ordered list of input devices and the single canonical
/// controller state the game reads each tick.
///
/// Devices are listed in order of preference; the first available one is
/// polled. Edge detection happens here, wrapped around the device poll:
/// capture the previous held booleans, let the device overwrite the state,
/// then compare.
pub struct ControllerManager {
    /// Devices in preference order, terminated by a disabled sentinel
    devices: Vec<Box<dyn ControllerDevice>>,

    /// The canonical per-tick input record
    state: ControllerState,

    /// Index of the device that served the previous poll, for logging
    active: Option<usize>,
}

impl ControllerManager {
    /// Create a manager with an explicit device list
    pub fn new(devices: Vec<Box<dyn ControllerDevice>>) -> Self {
        Self {
            devices,
            state: ControllerState::default(),
            active: None,
        }
    }

    /// Standard preference order: gamepad slots first, then the two
    /// keyboard layouts, then the disabled sentinel.
    pub fn with_default_devices() -> Self {
        let mut devices: Vec<Box<dyn ControllerDevice>> = Vec::new();
        for slot in 0..GAMEPAD_SLOTS {
            devices.push(Box::new(GamepadDevice::new(slot)));
        }
        devices.push(Box::new(KeyboardDevice::new(
            "keyboard 1",
            KeyboardLayout::wasd(),
        )));
        devices.push(Box::new(KeyboardDevice::new(
            "keyboard 2",
            KeyboardLayout::ijkl(),
        )));
        devices.push(Box::new(DisabledDevice));

        Self::new(devices)
    }

    /// Poll the first available device and refresh edge-triggered flags.
    ///
    /// Order matters: the previous choice vector and held booleans are
    /// captured before the device overwrites them, then the just-pressed
    /// flags are computed from the old/new pair. When no device is
    /// available the state is left untouched.
    pub fn poll(&mut self, host: &HostInput) {
        let Some(index) = self
            .devices
            .iter()
            .position(|device| device.is_available(host))
        else {
            return;
        };

        if self.active != Some(index) {
            info!("Active controller: {}", self.devices[index].name());
            self.active = Some(index);
        }

        let state = &mut self.state;
        state.last_choice = state.choice;
        let was_jumping = state.jump;
        let was_action = state.action;

        self.devices[index].poll(host, state);

        state.jump_just_pressed = state.jump && !was_jumping;
        state.action_just_pressed = state.action && !was_action;
    }

    /// The canonical input record from the latest poll
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Name of the device that served the latest poll, if any
    pub fn active_device(&self) -> Option<&str> {
        self.active.map(|index| self.devices[index].name())
    }
}
