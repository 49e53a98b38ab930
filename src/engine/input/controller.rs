// Canonical controller state and the device capability interface

use super::host::HostInput;
use glam::Vec2;

/// Input record produced once per tick by the active device.
///
/// Every device, keyboard or gamepad, normalizes into this one shape; game
/// code never knows which kind of hardware produced it.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
    /// Digital movement intent; each axis is -1, 0, or +1
    pub direction: Vec2,

    /// Analog selection vector, deadzone-adjusted, magnitude <= 1
    pub choice: Vec2,

    /// The previous tick's choice vector, for consumers needing deltas
    pub last_choice: Vec2,

    /// Jump input currently held
    pub jump: bool,

    /// True only on the tick jump transitioned from released to held
    pub jump_just_pressed: bool,

    /// Attack/action input currently held
    pub action: bool,

    /// True only on the tick action transitioned from released to held
    pub action_just_pressed: bool,
}

/// Capability interface every input device implements.
///
/// Devices read raw host state (key booleans, gamepad axes) and overwrite
/// the direction/choice/jump/action fields of the shared state. Edge
/// detection is not a device concern; the manager computes it around `poll`.
pub trait ControllerDevice {
    /// Human-readable device name for logs
    fn name(&self) -> &str;

    /// Whether this device can currently produce input
    fn is_available(&self, host: &HostInput) -> bool;

    /// Refresh the controller state from the raw host input
    fn poll(&mut self, host: &HostInput, state: &mut ControllerState);
}

/// Terminal sentinel for the device preference list: never available,
/// never changes state.
pub struct DisabledDevice;

impl ControllerDevice for DisabledDevice {
    fn name(&self) -> &str {
        "disabled"
    }

    fn is_available(&self, _host: &HostInput) -> bool {
        false
    }

    fn poll(&mut self, _host: &HostInput, _state: &mut ControllerState) {}
}
