// Rendering boundary
//
// This crate never rasterizes anything. Each tick the game emits a list of
// `DrawCommand`s; an external backend owns image decoding, textures, and the
// actual drawing. Images are referenced by opaque id (their asset path).

use glam::Vec2;

/// Opaque reference to an image asset, resolved by the external renderer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(pub String);

impl ImageId {
    pub fn new(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Upper-left corner
    pub origin: Vec2,
    pub extent: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, extent: Vec2) -> Self {
        Self { origin, extent }
    }
}

/// One quad for the external renderer to draw, in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fixed sub-rectangle of an image
    Static {
        image: ImageId,
        src: Rect,
        dst: Rect,
    },
    /// One cell of a sprite sheet, optionally mirrored
    Animated {
        image: ImageId,
        /// Upper-left corner of the sheet cell, in pixels
        cell_origin: Vec2,
        cell_size: Vec2,
        /// Where the cell's center goes on screen
        position: Vec2,
        /// +1.0 draws as-is, -1.0 mirrors horizontally
        flip: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_id_equality() {
        assert_eq!(ImageId::new("tiles.png"), ImageId::new("tiles.png"));
        assert_ne!(ImageId::new("tiles.png"), ImageId::new("moon.png"));
    }

    #[test]
    fn test_rect_construction() {
        let r = Rect::new(Vec2::new(72.0, 192.0), Vec2::new(192.0, 336.0));
        assert_eq!(r.origin.x, 72.0);
        assert_eq!(r.extent.y, 336.0);
    }
}
