// Resolves a level definition into a live physics world plus the player

use super::schema::{BodyDef, BodyKind, FixtureSpec, LevelDefinition, ObjectSpec, ShapeSpec};
use super::sprite::Sprite;
use super::LevelError;
use crate::core::math::METERS_PER_PIXEL;
use crate::engine::physics::{BodyBuilder, BodyHandle, ColliderBuilder2D, PhysicsWorld};
use crate::game::player::{CharacterSheet, Player, PLAYER_WIDTH_PX};
use glam::Vec2;
use log::{debug, info};

/// A built level: the physics world, the world objects in definition
/// order, and the player.
#[derive(Debug)]
pub struct Level {
    pub world: PhysicsWorld,
    pub objects: Vec<LevelObject>,
    pub player: Player,
}

/// One built world object: its sprites and the body they follow
#[derive(Debug)]
pub struct LevelObject {
    pub name: String,
    pub sprites: Vec<Sprite>,
    pub body: BodyHandle,
}

impl Level {
    /// Build every object of the definition in order, then spawn the
    /// player at the definition's spawn point.
    pub fn load(def: &LevelDefinition, sheet: CharacterSheet) -> Result<Self, LevelError> {
        let mut world = PhysicsWorld::with_gravity(def.gravity);

        let mut objects = Vec::with_capacity(def.objects.len());
        for spec in &def.objects {
            objects.push(build_object(&mut world, spec)?);
        }

        let player = spawn_player(&mut world, def.player_pos, sheet);
        info!(
            "level loaded: {} objects, player at {:?}",
            objects.len(),
            def.player_pos
        );

        Ok(Self {
            world,
            objects,
            player,
        })
    }
}

fn build_object(world: &mut PhysicsWorld, spec: &ObjectSpec) -> Result<LevelObject, LevelError> {
    let handle = world.add_rigid_body(body_from_def(&spec.body_def).build());

    for fixture in &spec.fixtures {
        let builder = collider_from_spec(&spec.name, fixture)?;
        world.add_collider(builder.build(), handle);
    }

    debug!(
        "built object '{}': {} fixtures, {} sprites",
        spec.name,
        spec.fixtures.len(),
        spec.graphics.len()
    );

    Ok(LevelObject {
        name: spec.name.clone(),
        sprites: spec.graphics.iter().map(Sprite::from_spec).collect(),
        body: handle,
    })
}

fn body_from_def(def: &BodyDef) -> BodyBuilder {
    let builder = match def.kind {
        BodyKind::Static => BodyBuilder::new_fixed(),
        BodyKind::Dynamic => BodyBuilder::new_dynamic(),
    };
    builder.position(def.position.x, def.position.y)
}

fn collider_from_spec(
    object: &str,
    fixture: &FixtureSpec,
) -> Result<ColliderBuilder2D, LevelError> {
    for (field, value) in [
        ("density", fixture.density),
        ("friction", fixture.friction),
        ("restitution", fixture.restitution),
    ] {
        if value < 0.0 {
            return Err(LevelError::NegativeMaterial {
                object: object.to_string(),
                field,
                value,
            });
        }
    }

    let builder = match &fixture.shape {
        ShapeSpec::Box { half_extent } => {
            ColliderBuilder2D::box_shape(half_extent.x, half_extent.y)
        }
        ShapeSpec::Circle {
            radius,
            local_offset,
        } => ColliderBuilder2D::circle(*radius, *local_offset),
        ShapeSpec::OrientedBox {
            half_extent,
            local_offset,
            rotation,
        } => ColliderBuilder2D::oriented_box(half_extent.x, half_extent.y, *local_offset, *rotation),
        shape @ ShapeSpec::Polygon { .. } => {
            return Err(LevelError::UnsupportedShape {
                object: object.to_string(),
                shape: shape.kind_name().to_string(),
            })
        }
    };

    Ok(builder
        .density(fixture.density)
        .friction(fixture.friction)
        .restitution(fixture.restitution))
}

/// Spawn the player body: an oriented-box torso over a circle base, so the
/// character slides over small ground seams instead of catching on them.
fn spawn_player(world: &mut PhysicsWorld, position: Vec2, sheet: CharacterSheet) -> Player {
    let width = PLAYER_WIDTH_PX * METERS_PER_PIXEL;
    let height = sheet.cell_size.y * METERS_PER_PIXEL;
    let radius = width / 2.0;

    let body = BodyBuilder::new_dynamic()
        .position(position.x, position.y)
        .lock_rotation()
        .can_sleep(false)
        .build();
    let handle = world.add_rigid_body(body);

    let torso = ColliderBuilder2D::oriented_box(
        radius,
        (height - radius) / 2.0,
        Vec2::new(0.0, -radius / 2.0),
        0.0,
    )
    .build();
    world.add_collider(torso, handle);

    let base = ColliderBuilder2D::circle(radius, Vec2::new(0.0, height / 2.0 - radius)).build();
    world.add_collider(base, handle);

    Player::new(handle, sheet)
}
