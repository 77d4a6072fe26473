//! ShapePad Render Library
//!
//! Renderer abstraction and scene building for ShapePad. Backends implement
//! [`Renderer`]; the scene module maps shapes and interaction state to draw
//! calls.

mod renderer;
mod scene;

pub use renderer::{DrawCommand, Pen, Recorder, Renderer};
pub use scene::{
    PREVIEW_ALPHA, PREVIEW_OUTLINE_WIDTH, SELECTION_COLOR, SELECTION_OUTLINE_WIDTH, draw_preview,
    draw_selected, draw_shape, paint,
};
