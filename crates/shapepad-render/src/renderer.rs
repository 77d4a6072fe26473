//! Renderer trait abstraction.

use shapepad_core::{Bounds, Color, Point};

/// Stroke parameters for outline drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    pub dashed: bool,
}

impl Pen {
    /// A solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
        }
    }

    /// A dashed stroke.
    pub fn dashed(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: true,
        }
    }
}

/// Trait for rasterizing backends.
///
/// The scene module drives this with vertex lists and bounding boxes; the
/// backend owns rasterization, anti-aliasing and dash patterns.
pub trait Renderer {
    fn fill_rect(&mut self, bounds: Bounds, color: Color);
    fn fill_ellipse(&mut self, bounds: Bounds, color: Color);
    fn fill_polygon(&mut self, vertices: &[Point], color: Color);
    fn stroke_rect(&mut self, bounds: Bounds, pen: Pen);
    fn stroke_ellipse(&mut self, bounds: Bounds, pen: Pen);
    fn stroke_polygon(&mut self, vertices: &[Point], pen: Pen);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { bounds: Bounds, color: Color },
    FillEllipse { bounds: Bounds, color: Color },
    FillPolygon { vertices: Vec<Point>, color: Color },
    StrokeRect { bounds: Bounds, pen: Pen },
    StrokeEllipse { bounds: Bounds, pen: Pen },
    StrokePolygon { vertices: Vec<Point>, pen: Pen },
}

/// A [`Renderer`] that records draw calls into a display list. Backends can
/// replay it; tests inspect it.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for Recorder {
    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.commands.push(DrawCommand::FillRect { bounds, color });
    }

    fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
        self.commands.push(DrawCommand::FillEllipse { bounds, color });
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn stroke_rect(&mut self, bounds: Bounds, pen: Pen) {
        self.commands.push(DrawCommand::StrokeRect { bounds, pen });
    }

    fn stroke_ellipse(&mut self, bounds: Bounds, pen: Pen) {
        self.commands.push(DrawCommand::StrokeEllipse { bounds, pen });
    }

    fn stroke_polygon(&mut self, vertices: &[Point], pen: Pen) {
        self.commands.push(DrawCommand::StrokePolygon {
            vertices: vertices.to_vec(),
            pen,
        });
    }
}
