// Game layer: levels, the player character, and the session that drives
// them each tick

pub mod level;
pub mod player;
pub mod session;

pub use session::Session;
