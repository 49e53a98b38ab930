use glam::Vec2;
use rapier2d::prelude::*;

/// Handle to identify rigid bodies
pub type BodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Physics world that manages all physics simulation
///
/// This is the only module that talks to rapier directly; the rest of the
/// game sees glam vectors and opaque body handles.
pub struct PhysicsWorld {
    /// Gravity vector in meters per second squared
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Query pipeline for raycasts and shape casts
    query_pipeline: QueryPipeline,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,
}

// Rapier's pipeline types don't implement Debug, so summarize instead
impl std::fmt::Debug for PhysicsWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhysicsWorld")
            .field("gravity", &self.gravity)
            .field("bodies", &self.rigid_body_set.len())
            .field("colliders", &self.collider_set.len())
            .finish_non_exhaustive()
    }
}

impl PhysicsWorld {
    /// Create a new physics world with the given gravity (meters/s²).
    ///
    /// Bodies are allowed to sleep; whether an individual body may sleep is
    /// decided when it is built.
    pub fn with_gravity(gravity: Vec2) -> Self {
        let integration_parameters = IntegrationParameters::default();

        Self {
            gravity: vector![gravity.x, gravity.y],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
        }
    }

    /// Step the physics simulation forward by `dt` seconds, then clear all
    /// accumulated forces so the next tick starts from a clean slate.
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );

        self.clear_forces();
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> BodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(&mut self, collider: Collider, parent: BodyHandle) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent, &mut self.rigid_body_set)
    }

    /// Apply a force to a body, acting at `at` (world coordinates, meters).
    /// The force persists until the next `step` clears it.
    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec2, at: Vec2) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.add_force_at_point(vector![force.x, force.y], point![at.x, at.y], true);
        }
    }

    /// Get a body's current position in meters
    pub fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let t = body.translation();
            Vec2::new(t.x, t.y)
        })
    }

    /// Get a body's current linear velocity in meters per second
    pub fn velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let v = body.linvel();
            Vec2::new(v.x, v.y)
        })
    }

    /// Number of rigid bodies in the world
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Number of colliders attached to a body
    pub fn collider_count(&self, handle: BodyHandle) -> usize {
        self.rigid_body_set
            .get(handle)
            .map(|body| body.colliders().len())
            .unwrap_or(0)
    }

    /// Current gravity vector
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity.x, self.gravity.y)
    }

    /// Zero the accumulated forces on every body
    fn clear_forces(&mut self) {
        for (_, body) in self.rigid_body_set.iter_mut() {
            body.reset_forces(true);
        }
    }
}
