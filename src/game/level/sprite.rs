// Resolved sprite attached to a built level object

use super::schema::SpriteSpec;
use crate::engine::renderer::{ImageId, Rect};
use crate::game::player::AnimationSet;
use glam::Vec2;

/// A sprite resolved from its spec: image names are wrapped into ids and
/// rectangles into renderer types, but nothing is loaded here.
#[derive(Debug, Clone)]
pub enum Sprite {
    Static {
        image: ImageId,
        src: Rect,
        dst: Rect,
    },
    Dynamic {
        image: ImageId,
        animations: AnimationSet,
        cell_size: Vec2,
        dst_origin: Vec2,
    },
}

impl Sprite {
    pub fn from_spec(spec: &SpriteSpec) -> Self {
        match spec {
            SpriteSpec::Static {
                image,
                src_origin,
                src_extent,
                dst_origin,
                dst_extent,
            } => Sprite::Static {
                image: ImageId(image.clone()),
                src: Rect {
                    origin: *src_origin,
                    extent: *src_extent,
                },
                dst: Rect {
                    origin: *dst_origin,
                    extent: *dst_extent,
                },
            },
            SpriteSpec::Dynamic {
                image,
                animations,
                cell_size,
                dst_origin,
            } => Sprite::Dynamic {
                image: ImageId(image.clone()),
                animations: *animations,
                cell_size: *cell_size,
                dst_origin: *dst_origin,
            },
        }
    }
}
