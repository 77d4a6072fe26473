//! The persisted record format and JSON round-trip for shape lists.
//!
//! On disk a document is an array of flat records:
//! `{ "Type": "Circle", "Center": { "X": 10, "Y": 20 }, "Radius": 15,
//!   "Color": { "A": 255, "R": 0, "G": 0, "B": 0 } }`.
//! Records carry no identity or selection state; order is z-order.

use crate::document::ShapeList;
use crate::geometry::Point;
use crate::shape::{Color, Shape, ShapeError, ShapeKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from decoding a persisted document.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed JSON, an unrecognized `Type`, or a missing field. The whole
    /// decode aborts; a partial load would be misleading.
    #[error("malformed shape data: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A record that parsed but violates the shape invariants.
    #[error("invalid shape record: {0}")]
    InvalidShape(#[from] ShapeError),
}

/// The serialized projection of a [`Shape`]: pure data, no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(rename = "Type")]
    pub kind: ShapeKind,
    #[serde(rename = "Center")]
    pub center: Point,
    #[serde(rename = "Radius")]
    pub radius: i32,
    #[serde(rename = "Color")]
    pub color: Color,
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        Self {
            kind: shape.kind(),
            center: shape.center(),
            radius: shape.radius(),
            color: shape.color(),
        }
    }
}

impl TryFrom<ShapeRecord> for Shape {
    type Error = ShapeError;

    /// Rebuild through [`Shape::new`], so decoded shapes pass the same
    /// `radius > 0` check as interactively created ones.
    fn try_from(record: ShapeRecord) -> Result<Self, ShapeError> {
        Shape::new(record.kind, record.center, record.radius, record.color)
    }
}

/// Project a shape list into records, preserving z-order.
pub fn encode(shapes: &ShapeList) -> Vec<ShapeRecord> {
    shapes.iter().map(ShapeRecord::from).collect()
}

/// Rebuild a shape list from records. Any invalid record aborts the whole
/// decode and nothing is returned.
pub fn decode(records: Vec<ShapeRecord>) -> Result<ShapeList, CodecError> {
    let mut shapes = ShapeList::new();
    for record in records {
        shapes.add(Shape::try_from(record)?);
    }
    Ok(shapes)
}

/// Serialize a shape list to pretty-printed JSON.
pub fn to_json(shapes: &ShapeList) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(&encode(shapes))?)
}

/// Parse and decode a JSON document.
pub fn from_json(json: &str) -> Result<ShapeList, CodecError> {
    decode(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> ShapeList {
        let mut shapes = ShapeList::new();
        shapes.add(Shape::new(ShapeKind::Rectangle, Point::new(10, 20), 15, Color::BLACK).unwrap());
        shapes.add(Shape::new(ShapeKind::Circle, Point::new(-5, 40), 8, Color::RED).unwrap());
        shapes.add(
            Shape::new(
                ShapeKind::Triangle,
                Point::new(100, 100),
                30,
                Color::GREEN.with_alpha(128),
            )
            .unwrap(),
        );
        shapes.add(Shape::new(ShapeKind::Hexagon, Point::new(0, 0), 50, Color::YELLOW).unwrap());
        shapes
    }

    #[test]
    fn test_round_trip_preserves_shapes_and_order() {
        let original = sample_list();
        let json = to_json(&original).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_record_field_layout() {
        let mut shapes = ShapeList::new();
        shapes.add(Shape::new(ShapeKind::Circle, Point::new(10, 20), 15, Color::BLACK).unwrap());
        let json = serde_json::to_string(&encode(&shapes)).unwrap();
        assert_eq!(
            json,
            r#"[{"Type":"Circle","Center":{"X":10,"Y":20},"Radius":15,"Color":{"A":255,"R":0,"G":0,"B":0}}]"#
        );
    }

    #[test]
    fn test_decode_conforming_document() {
        let json = r#"[
            {
                "Type": "Hexagon",
                "Center": { "X": 3, "Y": -7 },
                "Radius": 12,
                "Color": { "A": 100, "R": 255, "G": 165, "B": 0 }
            }
        ]"#;
        let shapes = from_json(json).unwrap();
        assert_eq!(shapes.len(), 1);
        let shape = shapes.get(0).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Hexagon);
        assert_eq!(shape.center(), Point::new(3, -7));
        assert_eq!(shape.radius(), 12);
        assert_eq!(shape.color(), Color::ORANGE.with_alpha(100));
    }

    #[test]
    fn test_unknown_kind_fails() {
        let json = r#"[{"Type":"Pentagon","Center":{"X":0,"Y":0},"Radius":10,"Color":{"A":255,"R":0,"G":0,"B":0}}]"#;
        assert!(matches!(from_json(json), Err(CodecError::Malformed(_))));
    }

    #[test]
    fn test_missing_kind_fails() {
        let json = r#"[{"Center":{"X":0,"Y":0},"Radius":10,"Color":{"A":255,"R":0,"G":0,"B":0}}]"#;
        assert!(matches!(from_json(json), Err(CodecError::Malformed(_))));
    }

    #[test]
    fn test_null_kind_fails() {
        let json = r#"[{"Type":null,"Center":{"X":0,"Y":0},"Radius":10,"Color":{"A":255,"R":0,"G":0,"B":0}}]"#;
        assert!(matches!(from_json(json), Err(CodecError::Malformed(_))));
    }

    #[test]
    fn test_non_positive_radius_aborts_decode() {
        let json = r#"[
            {"Type":"Circle","Center":{"X":0,"Y":0},"Radius":10,"Color":{"A":255,"R":0,"G":0,"B":0}},
            {"Type":"Circle","Center":{"X":5,"Y":5},"Radius":0,"Color":{"A":255,"R":0,"G":0,"B":0}}
        ]"#;
        assert!(matches!(from_json(json), Err(CodecError::InvalidShape(_))));
    }

    #[test]
    fn test_empty_document() {
        let shapes = from_json("[]").unwrap();
        assert!(shapes.is_empty());
        assert_eq!(to_json(&shapes).unwrap(), "[]");
    }
}
