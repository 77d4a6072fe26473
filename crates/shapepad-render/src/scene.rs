//! Scene building: maps shapes and editor state to renderer calls.

use crate::renderer::{Pen, Renderer};
use shapepad_core::{Color, Editor, Shape, ShapeKind};

/// Alpha applied to the fill of a creation preview.
pub const PREVIEW_ALPHA: u8 = 100;
/// Outline width for the preview border.
pub const PREVIEW_OUTLINE_WIDTH: f64 = 2.0;
/// Outline width for the selection highlight.
pub const SELECTION_OUTLINE_WIDTH: f64 = 3.0;
/// Selection highlight color.
pub const SELECTION_COLOR: Color = Color::ORANGE;

fn fill(renderer: &mut dyn Renderer, shape: &Shape, color: Color) {
    match shape.kind() {
        ShapeKind::Rectangle => renderer.fill_rect(shape.bounds(), color),
        ShapeKind::Circle => renderer.fill_ellipse(shape.bounds(), color),
        ShapeKind::Triangle | ShapeKind::Hexagon => {
            renderer.fill_polygon(&shape.vertices(), color);
        }
    }
}

fn outline(renderer: &mut dyn Renderer, shape: &Shape, pen: Pen) {
    match shape.kind() {
        ShapeKind::Rectangle => renderer.stroke_rect(shape.bounds(), pen),
        ShapeKind::Circle => renderer.stroke_ellipse(shape.bounds(), pen),
        ShapeKind::Triangle | ShapeKind::Hexagon => {
            renderer.stroke_polygon(&shape.vertices(), pen);
        }
    }
}

/// Draw a shape with its own solid fill.
pub fn draw_shape(renderer: &mut dyn Renderer, shape: &Shape) {
    fill(renderer, shape, shape.color());
}

/// Draw a creation preview: translucent fill plus a solid outline in the
/// shape's color. The override color is passed down explicitly; the shape's
/// stored color is never touched.
pub fn draw_preview(renderer: &mut dyn Renderer, shape: &Shape) {
    fill(renderer, shape, shape.color().with_alpha(PREVIEW_ALPHA));
    outline(
        renderer,
        shape,
        Pen::solid(shape.color(), PREVIEW_OUTLINE_WIDTH),
    );
}

/// Draw a selected shape: normal fill plus a dashed highlight outline.
pub fn draw_selected(renderer: &mut dyn Renderer, shape: &Shape) {
    fill(renderer, shape, shape.color());
    outline(
        renderer,
        shape,
        Pen::dashed(SELECTION_COLOR, SELECTION_OUTLINE_WIDTH),
    );
}

/// Paint the whole editor: shapes in z-order with the selected one
/// highlighted, then the creation preview on top.
pub fn paint(renderer: &mut dyn Renderer, editor: &Editor) {
    let selected = editor.selected_index();
    for (index, shape) in editor.shapes().iter().enumerate() {
        if selected == Some(index) {
            draw_selected(renderer, shape);
        } else {
            draw_shape(renderer, shape);
        }
    }
    if let Some(preview) = editor.preview() {
        draw_preview(renderer, preview);
    }
}
