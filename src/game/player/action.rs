// Discrete character actions

/// The one action a character performs on a given tick.
///
/// Exactly one action is active at any time; the per-action tick counter
/// resets whenever the action changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Standing still on ground
    Idle,
    /// Moving horizontally
    Run,
    /// Launched upward by the jump input
    Jump,
    /// Playing the attack animation to completion
    Attack,
    /// Declared in animation data; no transition produces it yet
    Duck,
}

impl Default for Action {
    fn default() -> Self {
        Self::Idle
    }
}

impl Action {
    /// Whether a new attack or jump may begin from this action.
    ///
    /// An in-progress attack or jump cannot be canceled into another one.
    pub fn is_interruptable(&self) -> bool {
        matches!(self, Self::Idle | Self::Run)
    }
}
