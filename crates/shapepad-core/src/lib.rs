//! ShapePad Core Library
//!
//! Platform-agnostic geometry, shape model and interaction logic for the
//! ShapePad vector-shape editor.

pub mod codec;
pub mod document;
pub mod editor;
pub mod geometry;
pub mod input;
pub mod shape;
pub mod storage;

pub use codec::{CodecError, ShapeRecord};
pub use document::ShapeList;
pub use editor::{Cursor, Editor, Gesture, MIN_SHAPE_RADIUS, Mode};
pub use geometry::{Bounds, Point};
pub use input::{MouseButton, PointerEvent};
pub use shape::{Color, Shape, ShapeError, ShapeKind};
pub use storage::{StorageError, StorageResult};
