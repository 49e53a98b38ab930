// Level loading: declarative JSON schema resolved into physics bodies,
// colliders and sprites

pub mod builder;
pub mod schema;
pub mod sprite;

use thiserror::Error;

pub use builder::{Level, LevelObject};
pub use schema::{
    test_level, BodyDef, BodyKind, FixtureSpec, LevelDefinition, ObjectSpec, ShapeSpec, SpriteSpec,
};
pub use sprite::Sprite;

/// Errors raised while parsing or building a level
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("object '{object}' uses unsupported shape '{shape}'")]
    UnsupportedShape { object: String, shape: String },

    #[error("object '{object}' has negative fixture {field}: {value}")]
    NegativeMaterial {
        object: String,
        field: &'static str,
        value: f32,
    },

    #[error("level schema error: {0}")]
    Schema(#[from] serde_json::Error),
}
