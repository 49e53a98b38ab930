// Shared helpers used by both the engine and game layers

pub mod math;
