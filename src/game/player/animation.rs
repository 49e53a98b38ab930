// Sprite-sheet animation: descriptors, loop policies, frame selection

use super::action::Action;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How many simulation ticks each animation frame is held for
pub const TICKS_PER_ANIMATION_FRAME: i32 = 2;

/// Rule for turning an increasing tick count into a bounded frame index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoopPolicy {
    /// Wrap back to the first frame
    Forward,
    /// Sweep forward then backward without repeating the endpoint frames
    Reverse,
    /// Hold the last frame once reached
    Clamp,
}

/// One animation inside a sprite sheet: where it starts, how many cells it
/// spans, and how it loops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDescriptor {
    /// Sheet cell column of the first frame
    pub col: u32,
    /// Sheet cell row
    pub row: u32,
    /// Number of frames, at least 1
    pub num_frames: u32,
    pub loop_policy: LoopPolicy,
}

/// Map a tick counter onto a frame index under the descriptor's loop policy
pub fn select_frame(desc: &AnimationDescriptor, ticks: i32, ticks_per_frame: i32) -> u32 {
    let frame = (ticks.max(0) / ticks_per_frame.max(1)) as u32;
    let n = desc.num_frames;

    match desc.loop_policy {
        LoopPolicy::Forward => frame % n,
        LoopPolicy::Reverse => {
            if n <= 1 {
                // Degenerate ping-pong; a single frame just holds
                return 0;
            }
            let period = 2 * n - 2;
            let cycle = frame % period;
            if cycle < n {
                cycle
            } else {
                2 * n - 2 - cycle
            }
        }
        LoopPolicy::Clamp => frame.min(n - 1),
    }
}

/// The closed per-action animation table of a character sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSet {
    pub idle: AnimationDescriptor,
    pub run: AnimationDescriptor,
    pub jump: AnimationDescriptor,
    pub attack: AnimationDescriptor,
    pub duck: AnimationDescriptor,
}

impl AnimationSet {
    /// The descriptor for an action; exhaustive over the action enum
    pub fn get(&self, action: Action) -> &AnimationDescriptor {
        match action {
            Action::Idle => &self.idle,
            Action::Run => &self.run,
            Action::Jump => &self.jump,
            Action::Attack => &self.attack,
            Action::Duck => &self.duck,
        }
    }
}

/// A character sprite sheet: image reference, per-action animations, cell
/// geometry, and the foot anchor within a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    /// Image reference, resolved by the external renderer
    pub image: String,
    pub animations: AnimationSet,
    /// Extent of one animation cell, in pixels
    pub cell_size: Vec2,
    /// Position of the feet within a cell, in pixels
    pub origin: Vec2,
}

impl CharacterSheet {
    /// The castle-platformer heroine sheet (princess.png, 264x162 cells)
    pub fn princess() -> Self {
        Self {
            image: "princess.png".to_string(),
            animations: AnimationSet {
                idle: AnimationDescriptor {
                    col: 0,
                    row: 0,
                    num_frames: 3,
                    loop_policy: LoopPolicy::Reverse,
                },
                jump: AnimationDescriptor {
                    col: 3,
                    row: 0,
                    num_frames: 4,
                    loop_policy: LoopPolicy::Clamp,
                },
                run: AnimationDescriptor {
                    col: 0,
                    row: 1,
                    num_frames: 8,
                    loop_policy: LoopPolicy::Forward,
                },
                attack: AnimationDescriptor {
                    col: 0,
                    row: 2,
                    num_frames: 6,
                    loop_policy: LoopPolicy::Clamp,
                },
                duck: AnimationDescriptor {
                    col: 6,
                    row: 2,
                    num_frames: 2,
                    loop_policy: LoopPolicy::Clamp,
                },
            },
            cell_size: Vec2::new(264.0, 162.0),
            origin: Vec2::new(134.0, 147.0),
        }
    }

    /// Upper-left pixel of the sheet cell showing `frame` of `action`
    pub fn cell_origin(&self, action: Action, frame: u32) -> Vec2 {
        let desc = self.animations.get(action);
        Vec2::new(
            (desc.col + frame) as f32 * self.cell_size.x,
            desc.row as f32 * self.cell_size.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(num_frames: u32, loop_policy: LoopPolicy) -> AnimationDescriptor {
        AnimationDescriptor {
            col: 0,
            row: 0,
            num_frames,
            loop_policy,
        }
    }

    #[test]
    fn test_forward_wraps_with_period_num_frames() {
        let desc = descriptor(8, LoopPolicy::Forward);
        for tick in 0..64 {
            let a = select_frame(&desc, tick, 1);
            let b = select_frame(&desc, tick + 8, 1);
            assert_eq!(a, (tick as u32) % 8);
            assert_eq!(a, b, "forward loop must be periodic in num_frames");
        }
    }

    #[test]
    fn test_reverse_ping_pong_sequence() {
        // Four frames sweep 0,1,2,3,2,1 then repeat (period 6), never
        // doubling the endpoints
        let desc = descriptor(4, LoopPolicy::Reverse);
        let expected = [0, 1, 2, 3, 2, 1, 0, 1, 2, 3, 2, 1];
        for (frame, &want) in expected.iter().enumerate() {
            assert_eq!(
                select_frame(&desc, frame as i32, 1),
                want,
                "mismatch at frame {}",
                frame
            );
        }
    }

    #[test]
    fn test_reverse_single_frame_degenerate() {
        let desc = descriptor(1, LoopPolicy::Reverse);
        for tick in 0..10 {
            assert_eq!(select_frame(&desc, tick, 1), 0);
        }
    }

    #[test]
    fn test_clamp_is_monotone_and_bounded() {
        let desc = descriptor(6, LoopPolicy::Clamp);
        let mut last = 0;
        for tick in 0..40 {
            let frame = select_frame(&desc, tick, 2);
            assert!(frame >= last, "clamp must be non-decreasing");
            assert!(frame <= 5, "clamp must stay below num_frames");
            last = frame;
        }
        // Reaches the last frame exactly when floor(tick / 2) >= 5
        assert_eq!(select_frame(&desc, 9, 2), 4);
        assert_eq!(select_frame(&desc, 10, 2), 5);
        assert_eq!(select_frame(&desc, 1000, 2), 5);
    }

    #[test]
    fn test_ticks_per_frame_slows_playback() {
        let desc = descriptor(8, LoopPolicy::Forward);
        assert_eq!(select_frame(&desc, 0, 2), 0);
        assert_eq!(select_frame(&desc, 1, 2), 0);
        assert_eq!(select_frame(&desc, 2, 2), 1);
        assert_eq!(select_frame(&desc, 3, 2), 1);
    }

    #[test]
    fn test_negative_ticks_read_as_first_frame() {
        let desc = descriptor(4, LoopPolicy::Forward);
        assert_eq!(select_frame(&desc, -1, 2), 0);
    }

    #[test]
    fn test_sheet_cell_origin() {
        let sheet = CharacterSheet::princess();
        // Run row 1, third frame
        let origin = sheet.cell_origin(Action::Run, 2);
        assert_eq!(origin, Vec2::new(2.0 * 264.0, 162.0));
        // Jump starts at column 3 of row 0
        let origin = sheet.cell_origin(Action::Jump, 0);
        assert_eq!(origin, Vec2::new(3.0 * 264.0, 0.0));
    }

    #[test]
    fn test_princess_table_shape() {
        let sheet = CharacterSheet::princess();
        assert_eq!(sheet.animations.get(Action::Idle).num_frames, 3);
        assert_eq!(sheet.animations.get(Action::Attack).num_frames, 6);
        assert_eq!(
            sheet.animations.get(Action::Run).loop_policy,
            LoopPolicy::Forward
        );
        assert_eq!(
            sheet.animations.get(Action::Idle).loop_policy,
            LoopPolicy::Reverse
        );
    }
}
