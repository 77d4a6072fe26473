//! The shape entity: kind, placement, color and hit-testing.

use crate::geometry::{self, Bounds, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from shape construction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("shape radius must be greater than 0, got {0}")]
    InvalidGeometry(i32),
}

/// The available shape kinds. The kind fixes the vertex and containment
/// formulas and is immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Hexagon,
}

/// An RGBA color. Serializes with the `A`,`R`,`G`,`B` field layout the
/// persisted format requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "A")]
    pub a: u8,
    #[serde(rename = "R")]
    pub r: u8,
    #[serde(rename = "G")]
    pub g: u8,
    #[serde(rename = "B")]
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::opaque(0, 0, 0);
    pub const RED: Color = Color::opaque(255, 0, 0);
    pub const BLUE: Color = Color::opaque(0, 0, 255);
    pub const GREEN: Color = Color::opaque(0, 128, 0);
    pub const YELLOW: Color = Color::opaque(255, 255, 0);
    pub const ORANGE: Color = Color::opaque(255, 165, 0);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// The same color with a different alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            a,
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// A shape on the canvas.
///
/// `kind` and `radius` are fixed at construction; `center` moves with drags
/// and `color` is rewritten when a move completes. The only way to obtain a
/// `Shape` is [`Shape::new`], which rejects non-positive radii, so every
/// instance in a collection satisfies `radius > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    center: Point,
    radius: i32,
    color: Color,
}

impl Shape {
    /// Create a shape. Fails when `radius <= 0`.
    pub fn new(kind: ShapeKind, center: Point, radius: i32, color: Color) -> Result<Self, ShapeError> {
        if radius <= 0 {
            return Err(ShapeError::InvalidGeometry(radius));
        }
        Ok(Self {
            kind,
            center,
            radius,
            color,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Translate the shape by the given deltas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.offset(dx, dy);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The bounding square spanned by the center and radius.
    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.center, self.radius)
    }

    /// The boundary vertex sequence. Empty for circles, which have no
    /// discrete vertices and render from their bounds.
    pub fn vertices(&self) -> Vec<Point> {
        match self.kind {
            ShapeKind::Rectangle => {
                let b = self.bounds();
                vec![
                    Point::new(b.left, b.top),
                    Point::new(b.right, b.top),
                    Point::new(b.right, b.bottom),
                    Point::new(b.left, b.bottom),
                ]
            }
            ShapeKind::Circle => Vec::new(),
            ShapeKind::Triangle => geometry::triangle_vertices(self.center, self.radius).to_vec(),
            ShapeKind::Hexagon => geometry::hexagon_vertices(self.center, self.radius).to_vec(),
        }
    }

    /// Whether a point falls inside this shape.
    pub fn hit_test(&self, point: Point) -> bool {
        match self.kind {
            ShapeKind::Rectangle => self.bounds().contains(point),
            ShapeKind::Circle => self.center.euclidean_distance(point) <= f64::from(self.radius),
            ShapeKind::Triangle | ShapeKind::Hexagon => {
                geometry::polygon_contains(&self.vertices(), point)
            }
        }
    }
}
