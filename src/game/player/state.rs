// Character action state machine
//
// Each tick, held inputs and the current action resolve into exactly one
// discrete action; the desired velocity that falls out is applied to the
// physics body as a force. This module never integrates physics itself.

use super::action::Action;
use super::animation::{select_frame, CharacterSheet, TICKS_PER_ANIMATION_FRAME};
use crate::engine::input::ControllerState;
use crate::engine::physics::{BodyHandle, PhysicsWorld};
use glam::Vec2;

/// Upward launch speed on the tick a jump begins (pixels/second)
pub const JUMP_VELOCITY: f32 = 1500.0;

/// Horizontal speed while running (pixels/second)
pub const RUN_VELOCITY: f32 = 1850.0;

/// Horizontal input below this magnitude reads as no movement intent
const DIRECTION_DEADZONE: f32 = 0.05;

/// Collision width of the character, in pixels
pub const PLAYER_WIDTH_PX: f32 = 90.0;

/// The one controllable character of a level
#[derive(Debug)]
pub struct Player {
    /// Velocity the state machine wants this tick, in pixels/second.
    /// Recomputed from scratch every tick and handed to physics as a force.
    pub desired_velocity: Vec2,

    /// +1.0 facing right, -1.0 facing left
    pub facing: f32,

    /// Current discrete action
    pub action: Action,

    /// Ticks since the current action started. Reset to 0 the tick the
    /// action changes; -1 only transiently inside `advance`.
    pub ticks: i32,

    /// Sprite sheet and per-action animation table
    pub sheet: CharacterSheet,

    /// Non-owning reference to the physics body
    pub body: BodyHandle,
}

impl Player {
    pub fn new(body: BodyHandle, sheet: CharacterSheet) -> Self {
        Self {
            desired_velocity: Vec2::ZERO,
            facing: 1.0,
            action: Action::Idle,
            ticks: 0,
            sheet,
            body,
        }
    }

    /// Advance the state machine by one tick and apply the resulting force
    /// to the physics body.
    ///
    /// Precedence: a held attack beats a held jump, and both may only start
    /// from an interruptable action (idle or run); horizontal intent is then
    /// recomputed unless an attack is still in progress, so left/right can
    /// change mid-run without a dedicated transition. A jump begun this
    /// tick keeps its label for the tick; from the next tick on the
    /// horizontal recompute applies as usual. There is deliberately no
    /// ground check here; settling after a jump is physics' job.
    pub fn advance(&mut self, input: &ControllerState, physics: &mut PhysicsWorld) {
        self.ticks += 1;

        let last_action = self.action;
        let attack_frames = self.sheet.animations.get(Action::Attack).num_frames as i32;
        let end_of_attack = self.action == Action::Attack
            && self.ticks / TICKS_PER_ANIMATION_FRAME >= attack_frames;

        self.desired_velocity = Vec2::ZERO;

        let mut jump_started = false;
        if self.action.is_interruptable() {
            if input.action {
                self.action = Action::Attack;
                // The change-of-action reset below brings this to 0, so the
                // frame shown this tick is frame 0
                self.ticks = -1;
            } else if input.jump {
                self.action = Action::Jump;
                self.ticks = -1;
                // Expressed purely as a velocity target for the physics
                // step, never as a position change
                self.desired_velocity.y = -JUMP_VELOCITY;
                jump_started = true;
            }
        }

        if (end_of_attack || self.action != Action::Attack) && !jump_started {
            if input.direction.x > DIRECTION_DEADZONE {
                self.action = Action::Run;
                self.facing = 1.0;
            } else if input.direction.x < -DIRECTION_DEADZONE {
                self.action = Action::Run;
                self.facing = -1.0;
            } else {
                self.action = Action::Idle;
            }

            if self.action == Action::Run {
                self.desired_velocity.x = RUN_VELOCITY * input.direction.x;
            }
        }

        if last_action != self.action {
            // Go to the first frame of the new animation
            self.ticks = 0;
        }

        if let Some(position) = physics.position(self.body) {
            physics.apply_force(self.body, self.desired_velocity, position);
        }
    }

    /// Frame index of the current action's animation for this tick
    pub fn frame(&self) -> u32 {
        select_frame(
            self.sheet.animations.get(self.action),
            self.ticks,
            TICKS_PER_ANIMATION_FRAME,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::{BodyBuilder, ColliderBuilder2D};

    fn world_with_player() -> (PhysicsWorld, Player) {
        let mut world = PhysicsWorld::with_gravity(Vec2::ZERO);
        let body = BodyBuilder::new_dynamic()
            .position(0.0, 0.0)
            .lock_rotation()
            .can_sleep(false)
            .build();
        let handle = world.add_rigid_body(body);
        world.add_collider(ColliderBuilder2D::circle(0.45, Vec2::ZERO).build(), handle);
        (world, Player::new(handle, CharacterSheet::princess()))
    }

    fn neutral() -> ControllerState {
        ControllerState::default()
    }

    #[test]
    fn test_idle_with_no_input_stays_idle() {
        let (mut world, mut player) = world_with_player();
        player.advance(&neutral(), &mut world);
        assert_eq!(player.action, Action::Idle);
        assert_eq!(player.desired_velocity, Vec2::ZERO);
    }

    #[test]
    fn test_counter_increments_within_unchanged_action() {
        let (mut world, mut player) = world_with_player();
        for expected in 1..=5 {
            player.advance(&neutral(), &mut world);
            assert_eq!(player.ticks, expected);
        }
    }

    #[test]
    fn test_horizontal_input_starts_run() {
        let (mut world, mut player) = world_with_player();
        let input = ControllerState {
            direction: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        player.advance(&input, &mut world);

        assert_eq!(player.action, Action::Run);
        assert_eq!(player.facing, 1.0);
        assert_eq!(player.desired_velocity.x, RUN_VELOCITY);
        assert_eq!(player.ticks, 0, "action change resets the counter");
    }

    #[test]
    fn test_facing_flips_mid_run_without_reset() {
        let (mut world, mut player) = world_with_player();
        let right = ControllerState {
            direction: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        let left = ControllerState {
            direction: Vec2::new(-1.0, 0.0),
            ..Default::default()
        };

        player.advance(&right, &mut world);
        player.advance(&right, &mut world);
        assert_eq!(player.ticks, 1);

        player.advance(&left, &mut world);
        assert_eq!(player.action, Action::Run);
        assert_eq!(player.facing, -1.0);
        assert_eq!(player.desired_velocity.x, -RUN_VELOCITY);
        assert_eq!(player.ticks, 2, "run-to-run keeps counting");
    }

    #[test]
    fn test_deadzone_ignores_tiny_direction() {
        let (mut world, mut player) = world_with_player();
        let input = ControllerState {
            direction: Vec2::new(0.04, 0.0),
            ..Default::default()
        };
        player.advance(&input, &mut world);
        assert_eq!(player.action, Action::Idle);
        assert_eq!(player.desired_velocity.x, 0.0);
    }

    #[test]
    fn test_jump_from_idle() {
        let (mut world, mut player) = world_with_player();
        player.ticks = 5;

        let input = ControllerState {
            jump: true,
            ..Default::default()
        };
        player.advance(&input, &mut world);

        assert_eq!(player.action, Action::Jump);
        assert_eq!(player.ticks, 0);
        assert_eq!(player.desired_velocity.y, -JUMP_VELOCITY);
        assert_eq!(player.frame(), 0, "jump shows its first frame this tick");
    }

    #[test]
    fn test_attack_beats_jump() {
        let (mut world, mut player) = world_with_player();
        let input = ControllerState {
            jump: true,
            action: true,
            ..Default::default()
        };
        player.advance(&input, &mut world);

        assert_eq!(player.action, Action::Attack);
        assert_eq!(player.ticks, 0);
        assert_eq!(player.desired_velocity.y, 0.0);
    }

    #[test]
    fn test_attack_cannot_be_canceled_into_run() {
        let (mut world, mut player) = world_with_player();
        let attack = ControllerState {
            action: true,
            ..Default::default()
        };
        player.advance(&attack, &mut world);
        assert_eq!(player.action, Action::Attack);

        // Holding right mid-attack must not break out
        let run = ControllerState {
            direction: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        player.advance(&run, &mut world);
        assert_eq!(player.action, Action::Attack);
        assert_eq!(player.ticks, 1);
        assert_eq!(player.desired_velocity.x, 0.0);
    }

    #[test]
    fn test_attack_completion_returns_to_idle() {
        // 6 attack frames at 2 ticks per frame end the attack once
        // counter/2 >= 6
        let (mut world, mut player) = world_with_player();
        player.action = Action::Attack;
        player.ticks = 11;

        player.advance(&neutral(), &mut world);
        assert_eq!(player.action, Action::Idle);
        assert_eq!(player.ticks, 0);
    }

    #[test]
    fn test_attack_completion_into_run() {
        let (mut world, mut player) = world_with_player();
        player.action = Action::Attack;
        player.ticks = 11;

        let input = ControllerState {
            direction: Vec2::new(-1.0, 0.0),
            ..Default::default()
        };
        player.advance(&input, &mut world);
        assert_eq!(player.action, Action::Run);
        assert_eq!(player.facing, -1.0);
        assert_eq!(player.ticks, 0);
    }

    #[test]
    fn test_held_attack_restarts_after_completion() {
        let (mut world, mut player) = world_with_player();
        let attack = ControllerState {
            action: true,
            ..Default::default()
        };
        player.advance(&attack, &mut world);
        assert_eq!(player.action, Action::Attack);

        // Ride out the whole attack with the button held; the attack is
        // not interruptable, so nothing restarts early
        for _ in 0..11 {
            player.advance(&attack, &mut world);
        }
        assert_eq!(player.action, Action::Attack);

        // Counter has now crossed the end; next tick goes through idle
        // resolution, and the tick after that the held button re-attacks
        player.advance(&attack, &mut world);
        assert_eq!(player.action, Action::Idle);
        player.advance(&attack, &mut world);
        assert_eq!(player.action, Action::Attack);
        assert_eq!(player.ticks, 0);
    }

    #[test]
    fn test_desired_velocity_recomputed_every_tick() {
        let (mut world, mut player) = world_with_player();
        let run = ControllerState {
            direction: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        player.advance(&run, &mut world);
        assert_eq!(player.desired_velocity.x, RUN_VELOCITY);

        player.advance(&neutral(), &mut world);
        assert_eq!(player.desired_velocity, Vec2::ZERO);
    }

    #[test]
    fn test_duck_never_reached() {
        let (mut world, mut player) = world_with_player();
        let everything = ControllerState {
            direction: Vec2::new(0.0, 1.0),
            jump: true,
            action: true,
            ..Default::default()
        };
        for _ in 0..20 {
            player.advance(&everything, &mut world);
            assert_ne!(player.action, Action::Duck);
        }
    }
}
