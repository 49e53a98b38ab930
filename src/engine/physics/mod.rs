// Physics boundary built on rapier2d
//
// The rest of the game interacts with physics only through `PhysicsWorld`
// and the body/collider builders; rapier types never leak past this module
// except for the opaque handles.

pub mod body;
mod world;

pub use body::{BodyBuilder, ColliderBuilder2D};
pub use world::{BodyHandle, PhysicsWorld};
