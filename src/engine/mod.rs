// Engine modules: input, physics, rendering boundary, tick timing

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
