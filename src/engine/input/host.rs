// Raw host input: winit key states and gilrs gamepads
//
// The host environment pushes key transitions in and pumps the gamepad
// event queue once per tick; devices only ever read from here.

use gilrs::{Gamepad, Gilrs};
use log::{info, warn};
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Raw per-key and per-gamepad state supplied by the host environment
pub struct HostInput {
    /// Keys currently held down
    keys: HashSet<KeyCode>,

    /// Gamepad backend; `None` when unavailable (headless, tests)
    gamepads: Option<Gilrs>,
}

impl HostInput {
    /// Keyboard-only host input (no gamepad backend)
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            gamepads: None,
        }
    }

    /// Host input with the gamepad backend attached.
    ///
    /// Gamepad initialization failing is not an error; the keyboard devices
    /// further down the preference list take over.
    pub fn with_gamepads() -> Self {
        let gamepads = match Gilrs::new() {
            Ok(gilrs) => {
                for (_, pad) in gilrs.gamepads() {
                    info!("Gamepad connected: {}", pad.name());
                }
                Some(gilrs)
            }
            Err(err) => {
                warn!("Gamepad support unavailable: {}", err);
                None
            }
        };

        Self {
            keys: HashSet::new(),
            gamepads,
        }
    }

    /// Record a key press from the window event loop
    pub fn press_key(&mut self, key: KeyCode) {
        self.keys.insert(key);
    }

    /// Record a key release from the window event loop
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    /// Whether a key is currently held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Drain pending gamepad events so `gamepad()` reads fresh state.
    /// Call once per tick, before devices poll.
    pub fn pump_gamepads(&mut self) {
        if let Some(gilrs) = &mut self.gamepads {
            while gilrs.next_event().is_some() {}
        }
    }

    /// The `index`-th connected gamepad, in backend enumeration order
    pub fn gamepad(&self, index: usize) -> Option<Gamepad<'_>> {
        self.gamepads
            .as_ref()
            .and_then(|gilrs| gilrs.gamepads().nth(index).map(|(_, pad)| pad))
    }
}

impl Default for HostInput {
    fn default() -> Self {
        Self::new()
    }
}
