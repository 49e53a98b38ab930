// Declarative level schema: a serde data model that round-trips through
// JSON exactly. Nothing here touches the physics engine; `builder` does
// the resolution.

use super::LevelError;
use crate::game::player::AnimationSet;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A whole level as data: gravity, world objects in draw/build order, and
/// the player spawn point. Distances are meters, y pointing down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDefinition {
    /// World gravity in meters/second^2
    pub gravity: Vec2,
    /// Objects in insertion order; build and draw both follow it
    pub objects: Vec<ObjectSpec>,
    /// Player spawn position in meters
    pub player_pos: Vec2,
}

impl LevelDefinition {
    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One named world object: a body, its fixtures, and how it is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSpec {
    pub name: String,
    pub body_def: BodyDef,
    pub fixtures: Vec<FixtureSpec>,
    #[serde(default)]
    pub graphics: Vec<SpriteSpec>,
}

/// Body placement and motion class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDef {
    pub kind: BodyKind,
    /// Body origin in meters
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    Static,
    Dynamic,
}

/// One collision fixture of a body. All three material fields are
/// required; a level file that omits one fails to parse rather than
/// getting an invented value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureSpec {
    pub shape: ShapeSpec,
    pub density: f32,
    pub friction: f32,
    pub restitution: f32,
}

/// Collision shape, tagged so the JSON stays self-describing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ShapeSpec {
    /// Axis-aligned box centered on the body origin
    Box { half_extent: Vec2 },
    /// Circle offset from the body origin
    Circle { radius: f32, local_offset: Vec2 },
    /// Box with a local offset and rotation (radians)
    OrientedBox {
        half_extent: Vec2,
        local_offset: Vec2,
        rotation: f32,
    },
    /// Accepted by the schema but rejected at build time
    Polygon { vertices: Vec<Vec2> },
}

impl ShapeSpec {
    /// Schema tag of the variant, for error reporting
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeSpec::Box { .. } => "box",
            ShapeSpec::Circle { .. } => "circle",
            ShapeSpec::OrientedBox { .. } => "orientedBox",
            ShapeSpec::Polygon { .. } => "polygon",
        }
    }
}

/// How a world object is drawn. Rectangles and positions are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SpriteSpec {
    /// A fixed sub-rectangle of an image, stretched onto a world rectangle
    Static {
        image: String,
        src_origin: Vec2,
        src_extent: Vec2,
        dst_origin: Vec2,
        dst_extent: Vec2,
    },
    /// A sheet-animated sprite that idles on the session clock
    Dynamic {
        image: String,
        animations: AnimationSet,
        cell_size: Vec2,
        dst_origin: Vec2,
    },
}

/// The built-in castle level: a ground slab, one wall, and the spawn point,
/// laid out for a 1920x1080 virtual screen.
pub fn test_level() -> LevelDefinition {
    LevelDefinition {
        gravity: Vec2::new(0.0, 10.0),
        objects: vec![
            ObjectSpec {
                name: "ground".to_string(),
                body_def: BodyDef {
                    kind: BodyKind::Static,
                    position: Vec2::new(9.6, 9.18),
                },
                fixtures: vec![FixtureSpec {
                    shape: ShapeSpec::Box {
                        half_extent: Vec2::new(4.8, 0.54),
                    },
                    density: 1.0,
                    friction: 0.5,
                    restitution: 0.0,
                }],
                graphics: vec![SpriteSpec::Static {
                    image: "ground.png".to_string(),
                    src_origin: Vec2::new(0.0, 0.0),
                    src_extent: Vec2::new(960.0, 108.0),
                    dst_origin: Vec2::new(480.0, 864.0),
                    dst_extent: Vec2::new(960.0, 108.0),
                }],
            },
            ObjectSpec {
                name: "wall".to_string(),
                body_def: BodyDef {
                    kind: BodyKind::Static,
                    position: Vec2::new(4.5, 8.8),
                },
                fixtures: vec![FixtureSpec {
                    shape: ShapeSpec::Box {
                        half_extent: Vec2::new(0.45, 1.44),
                    },
                    density: 1.0,
                    friction: 0.5,
                    restitution: 0.0,
                }],
                graphics: vec![SpriteSpec::Static {
                    image: "wall.png".to_string(),
                    src_origin: Vec2::new(0.0, 0.0),
                    src_extent: Vec2::new(90.0, 288.0),
                    dst_origin: Vec2::new(405.0, 736.0),
                    dst_extent: Vec2::new(90.0, 288.0),
                }],
            },
        ],
        player_pos: Vec2::new(7.0, 7.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trips_through_json() {
        let level = test_level();
        let text = level.to_json().unwrap();
        let parsed = LevelDefinition::from_json(&text).unwrap();
        assert_eq!(level, parsed);
    }

    #[test]
    fn test_object_order_is_preserved() {
        let level = test_level();
        let text = level.to_json().unwrap();
        let parsed = LevelDefinition::from_json(&text).unwrap();
        let names: Vec<&str> = parsed.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["ground", "wall"]);
    }

    #[test]
    fn test_schema_uses_camel_case_keys() {
        let text = test_level().to_json().unwrap();
        assert!(text.contains("\"playerPos\""));
        assert!(text.contains("\"bodyDef\""));
        assert!(text.contains("\"halfExtent\""));
        assert!(!text.contains("\"player_pos\""));
    }

    #[test]
    fn test_fixture_missing_material_field_is_rejected() {
        // Only a shape, no density/friction/restitution
        let text = r#"{"shape": {"type": "circle", "radius": 0.5, "localOffset": [0.0, 0.0]}}"#;
        assert!(serde_json::from_str::<FixtureSpec>(text).is_err());

        // One field present does not excuse the others
        let text = r#"{
            "shape": {"type": "circle", "radius": 0.5, "localOffset": [0.0, 0.0]},
            "density": 1.0
        }"#;
        assert!(serde_json::from_str::<FixtureSpec>(text).is_err());
    }

    #[test]
    fn test_malformed_document_surfaces_as_level_error() {
        let err = LevelDefinition::from_json("{\"gravity\": [0.0").unwrap_err();
        assert!(matches!(err, LevelError::Schema(_)));
    }

    #[test]
    fn test_unknown_shape_tag_is_rejected() {
        let text = r#"{"type": "capsule", "radius": 0.5}"#;
        assert!(serde_json::from_str::<ShapeSpec>(text).is_err());
    }

    #[test]
    fn test_polygon_parses_but_is_named() {
        let text = r#"{"type": "polygon", "vertices": [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]}"#;
        let shape: ShapeSpec = serde_json::from_str(text).unwrap();
        assert_eq!(shape.kind_name(), "polygon");
    }
}
