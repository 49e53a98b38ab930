// Player character: action state machine, animation tables, sprite sheet

pub mod action;
pub mod animation;
mod state;

pub use action::Action;
pub use animation::{
    select_frame, AnimationDescriptor, AnimationSet, CharacterSheet, LoopPolicy,
    TICKS_PER_ANIMATION_FRAME,
};
pub use state::{Player, JUMP_VELOCITY, PLAYER_WIDTH_PX, RUN_VELOCITY};
