// One running play session: a built level, its controllers, and the
// per-tick drive that connects them

use crate::core::math::meters_to_pixels;
use crate::engine::input::{ControllerManager, HostInput};
use crate::engine::renderer::{DrawCommand, ImageId, Rect};
use crate::game::level::{Level, Sprite};
use crate::game::player::{select_frame, TICKS_PER_ANIMATION_FRAME};
use glam::Vec2;

pub struct Session {
    pub level: Level,
    pub controllers: ControllerManager,
    /// Session-wide tick counter, drives level sprite idling
    ticks: i32,
}

impl Session {
    pub fn new(level: Level, controllers: ControllerManager) -> Self {
        Self {
            level,
            controllers,
            ticks: 0,
        }
    }

    /// One fixed-timestep tick: read input, run the character state
    /// machine, then integrate physics.
    pub fn tick(&mut self, host: &HostInput, dt: f32) {
        self.controllers.poll(host);
        let input = self.controllers.state().clone();

        self.level.player.advance(&input, &mut self.level.world);
        self.level.world.step(dt);
        self.ticks += 1;
    }

    pub fn ticks(&self) -> i32 {
        self.ticks
    }

    /// Emit this frame's draw list in back-to-front order: level objects
    /// first in definition order, the player last. The camera tracks the
    /// player horizontally and never shows past the level's left edge.
    pub fn draw_commands(&self, screen_extent: Vec2) -> Vec<DrawCommand> {
        let player_px = self
            .level
            .world
            .position(self.level.player.body)
            .map(meters_to_pixels)
            .unwrap_or(Vec2::ZERO);

        let camera = Vec2::new((player_px.x - screen_extent.x / 2.0).max(0.0), 0.0);

        let mut commands = Vec::new();
        for object in &self.level.objects {
            for sprite in &object.sprites {
                commands.push(self.sprite_command(sprite, camera));
            }
        }
        commands.push(self.player_command(player_px, camera));
        commands
    }

    fn sprite_command(&self, sprite: &Sprite, camera: Vec2) -> DrawCommand {
        match sprite {
            Sprite::Static { image, src, dst } => DrawCommand::Static {
                image: image.clone(),
                src: *src,
                dst: Rect::new(dst.origin - camera, dst.extent),
            },
            Sprite::Dynamic {
                image,
                animations,
                cell_size,
                dst_origin,
            } => {
                // Level sprites have no action of their own; they idle on
                // the session clock
                let desc = &animations.idle;
                let frame = select_frame(desc, self.ticks, TICKS_PER_ANIMATION_FRAME);
                DrawCommand::Animated {
                    image: image.clone(),
                    cell_origin: Vec2::new(
                        (desc.col + frame) as f32 * cell_size.x,
                        desc.row as f32 * cell_size.y,
                    ),
                    cell_size: *cell_size,
                    position: *dst_origin - camera + *cell_size / 2.0,
                    flip: 1.0,
                }
            }
        }
    }

    fn player_command(&self, player_px: Vec2, camera: Vec2) -> DrawCommand {
        let player = &self.level.player;
        let sheet = &player.sheet;

        // The body origin is the character's center; the sheet origin marks
        // the feet within a cell. Line the two up, then hand the renderer
        // the cell's center.
        let feet = player_px + Vec2::new(0.0, sheet.cell_size.y / 2.0);
        let center = feet + (sheet.cell_size / 2.0 - sheet.origin);

        DrawCommand::Animated {
            image: ImageId(sheet.image.clone()),
            cell_origin: sheet.cell_origin(player.action, player.frame()),
            cell_size: sheet.cell_size,
            position: center - camera,
            flip: player.facing,
        }
    }
}
