use glam::Vec2;
use rapier2d::prelude::*;

pub use rapier2d::prelude::ColliderHandle;

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    can_sleep: bool,
    locked_axes: LockedAxes,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            can_sleep: true,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Create a new fixed (static) body (completely immovable)
    pub fn new_fixed() -> Self {
        Self {
            body_type: RigidBodyType::Fixed,
            position: Isometry::identity(),
            can_sleep: false,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Set the initial position of the body (meters)
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Lock rotation (useful for player characters)
    pub fn lock_rotation(mut self) -> Self {
        self.locked_axes = LockedAxes::ROTATION_LOCKED;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .can_sleep(self.can_sleep)
            .locked_axes(self.locked_axes)
            .build()
    }
}

/// Builder for creating colliders from the shapes the level schema declares:
/// axis-aligned box, circle with a local offset, and oriented box.
pub struct ColliderBuilder2D {
    shape: SharedShape,
    local_pose: Isometry<Real>,
    friction: Real,
    restitution: Real,
    density: Real,
}

impl ColliderBuilder2D {
    fn with_shape(shape: SharedShape, local_pose: Isometry<Real>) -> Self {
        Self {
            shape,
            local_pose,
            friction: 0.5,
            restitution: 0.0,
            density: 1.0,
        }
    }

    /// Create a box-shaped collider centered on the body (half extents, meters)
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self::with_shape(
            SharedShape::cuboid(half_width, half_height),
            Isometry::identity(),
        )
    }

    /// Create a circle-shaped collider at a local offset from the body
    pub fn circle(radius: Real, local_offset: Vec2) -> Self {
        Self::with_shape(
            SharedShape::ball(radius),
            Isometry::translation(local_offset.x, local_offset.y),
        )
    }

    /// Create a box collider rotated and offset relative to the body
    pub fn oriented_box(
        half_width: Real,
        half_height: Real,
        local_offset: Vec2,
        rotation: Real,
    ) -> Self {
        Self::with_shape(
            SharedShape::cuboid(half_width, half_height),
            Isometry::new(vector![local_offset.x, local_offset.y], rotation),
        )
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set density (mass is derived from shape area)
    pub fn density(mut self, density: Real) -> Self {
        self.density = density;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        rapier2d::prelude::ColliderBuilder::new(self.shape)
            .position(self.local_pose)
            .friction(self.friction)
            .restitution(self.restitution)
            .density(self.density)
            .build()
    }
}
