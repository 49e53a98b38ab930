// Controller abstraction layer
//
// Heterogeneous input devices (keyboards, gamepads) are normalized into one
// canonical per-tick `ControllerState` with edge-triggered just-pressed
// flags.
//
// - `host`: raw key booleans and gamepad axes supplied by the environment
// - `controller`: the canonical state record and the device trait
// - `keyboard` / `gamepad`: concrete devices
// - `manager`: device preference list, first-available selection, edge
//   detection
//
// Per tick: `HostInput::pump_gamepads`, then `ControllerManager::poll`,
// then read `ControllerManager::state`.

pub mod controller;
pub mod gamepad;
pub mod host;
pub mod keyboard;
pub mod manager;

// Re-export commonly used types
pub use controller::{ControllerDevice, ControllerState, DisabledDevice};
pub use host::HostInput;
pub use manager::ControllerManager;
