//! The shape collection: an ordered list with z-order hit resolution.

use crate::geometry::Point;
use crate::shape::Shape;

/// An ordered sequence of shapes. Insertion order is z-order: later shapes
/// draw on top of earlier ones and win hit resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from shapes already in z-order.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Append a shape on top of the stack.
    pub fn add(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove and return the shape at `index`, shifting later shapes down.
    pub fn remove_at(&mut self, index: usize) -> Option<Shape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// Remove all shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Iterate in z-order, back to front.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Index of the topmost shape containing `point`.
    ///
    /// Scans from the last-inserted shape backwards so that newer shapes,
    /// which occlude older ones visually, also win hit resolution.
    pub fn topmost_hit_at(&self, point: Point) -> Option<usize> {
        self.shapes.iter().rposition(|shape| shape.hit_test(point))
    }
}
