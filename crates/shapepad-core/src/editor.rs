//! The mode-driven interaction state machine.
//!
//! Consumes pointer events and mutates the shape list: creation drags build a
//! preview and commit on release, move drags translate the topmost hit, and
//! delete clicks remove it. Switching modes always resets the in-progress
//! gesture, so no drag or draw can span a mode change.

use crate::document::ShapeList;
use crate::geometry::Point;
use crate::input::{MouseButton, PointerEvent};
use crate::shape::{Color, Shape, ShapeKind};
use log::{debug, warn};

/// Creation drags below this radius commit nothing; stray clicks must not
/// leave near-zero-size shapes behind.
pub const MIN_SHAPE_RADIUS: i32 = 5;

/// The interaction mode selected in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Creating,
    Moving,
    Deleting,
}

/// The cursor affordance the windowing layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Over a draggable shape in moving mode.
    Hand,
    /// Over a shape in deleting mode.
    No,
}

/// Per-mode gesture sub-state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// A creation drag: the preview is rebuilt on every pointer move and is
    /// never added to the shape list.
    Drawing { start: Point, preview: Option<Shape> },
    /// A move drag. `last` is the previous pointer position; each move applies
    /// only the delta since then, so translation accumulates drift-free.
    Dragging { index: usize, last: Point },
}

/// The editor: shape list plus all transient interaction state.
///
/// `selected` and the drag target are indices into the shape list, never
/// owning references; they are revalidated on every use and treated as "no
/// selection" once stale.
#[derive(Debug, Clone)]
pub struct Editor {
    shapes: ShapeList,
    mode: Mode,
    tool: ShapeKind,
    color: Color,
    gesture: Gesture,
    selected: Option<usize>,
    cursor: Cursor,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with an empty shape list, creating rectangles in
    /// black.
    pub fn new() -> Self {
        Self {
            shapes: ShapeList::new(),
            mode: Mode::Creating,
            tool: ShapeKind::Rectangle,
            color: Color::BLACK,
            gesture: Gesture::Idle,
            selected: None,
            cursor: Cursor::Default,
        }
    }

    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tool(&self) -> ShapeKind {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The selected shape's index, or `None` when the selection is stale.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.filter(|&index| index < self.shapes.len())
    }

    /// The ephemeral creation preview, if a drawing drag is in progress.
    pub fn preview(&self) -> Option<&Shape> {
        match &self.gesture {
            Gesture::Drawing { preview, .. } => preview.as_ref(),
            _ => None,
        }
    }

    /// Whether a move drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// Switch interaction modes. Any in-progress gesture, the selection, the
    /// preview and the cursor are reset together.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("mode switch {:?} -> {mode:?}", self.mode);
        self.mode = mode;
        self.reset_interaction();
    }

    pub fn set_tool(&mut self, tool: ShapeKind) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Remove every shape and reset the interaction state.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.reset_interaction();
    }

    /// Replace the whole shape list, e.g. after a file load. A load is a full
    /// replace, never a merge, and no gesture survives it.
    pub fn replace_shapes(&mut self, shapes: ShapeList) {
        self.shapes = shapes;
        self.reset_interaction();
    }

    fn reset_interaction(&mut self) {
        self.gesture = Gesture::Idle;
        self.selected = None;
        self.cursor = Cursor::Default;
    }

    /// Feed one pointer event through the state machine. Returns whether a
    /// repaint is needed.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position, button } => {
                if button != MouseButton::Left {
                    return false;
                }
                match self.mode {
                    Mode::Creating => self.creating_down(position),
                    Mode::Moving => self.moving_down(position),
                    Mode::Deleting => self.deleting_down(position),
                }
            }
            PointerEvent::Move { position } => match self.mode {
                Mode::Creating => self.creating_move(position),
                Mode::Moving => self.moving_move(position),
                Mode::Deleting => self.update_hover_cursor(position, Cursor::No),
            },
            PointerEvent::Up { button, position } => {
                if button != MouseButton::Left {
                    return false;
                }
                match self.mode {
                    Mode::Creating => self.creating_up(position),
                    Mode::Moving => self.moving_up(),
                    Mode::Deleting => false,
                }
            }
        }
    }

    fn creating_down(&mut self, position: Point) -> bool {
        self.selected = None;
        self.gesture = Gesture::Drawing {
            start: position,
            preview: None,
        };
        true
    }

    fn creating_move(&mut self, position: Point) -> bool {
        let Gesture::Drawing { start, ref mut preview } = self.gesture else {
            return false;
        };
        let radius = start.chebyshev_distance(position);
        *preview = if radius > 0 {
            Shape::new(self.tool, start, radius, self.color).ok()
        } else {
            None
        };
        true
    }

    fn creating_up(&mut self, position: Point) -> bool {
        let Gesture::Drawing { start, .. } = self.gesture else {
            return false;
        };
        self.gesture = Gesture::Idle;

        let radius = start.chebyshev_distance(position);
        if radius > MIN_SHAPE_RADIUS {
            match Shape::new(self.tool, start, radius, self.color) {
                Ok(shape) => {
                    debug!("committed {:?} r={radius} at {start:?}", self.tool);
                    self.shapes.add(shape);
                }
                Err(err) => warn!("creation drag produced no shape: {err}"),
            }
        } else {
            debug!("discarded creation drag, radius {radius} below minimum");
        }
        true
    }

    fn moving_down(&mut self, position: Point) -> bool {
        match self.shapes.topmost_hit_at(position) {
            Some(index) => {
                self.selected = Some(index);
                self.gesture = Gesture::Dragging {
                    index,
                    last: position,
                };
                self.cursor = Cursor::Hand;
            }
            None => {
                self.selected = None;
                self.gesture = Gesture::Idle;
                self.cursor = Cursor::Default;
            }
        }
        true
    }

    fn moving_move(&mut self, position: Point) -> bool {
        let Gesture::Dragging { index, last } = self.gesture else {
            return self.update_hover_cursor(position, Cursor::Hand);
        };
        match self.shapes.get_mut(index) {
            Some(shape) => {
                shape.translate(position.x - last.x, position.y - last.y);
                self.gesture = Gesture::Dragging {
                    index,
                    last: position,
                };
                true
            }
            None => {
                // Stale index: the shape is gone, drop the drag.
                self.gesture = Gesture::Idle;
                self.selected = None;
                true
            }
        }
    }

    fn moving_up(&mut self) -> bool {
        let Gesture::Dragging { .. } = self.gesture else {
            return false;
        };
        self.gesture = Gesture::Idle;
        self.cursor = Cursor::Default;

        // Color changes take effect when a move completes.
        let color = self.color;
        if let Some(shape) = self.selected_index().and_then(|index| self.shapes.get_mut(index)) {
            shape.set_color(color);
        }
        true
    }

    fn deleting_down(&mut self, position: Point) -> bool {
        let Some(index) = self.shapes.topmost_hit_at(position) else {
            return false;
        };
        let removed = self.shapes.remove_at(index);
        debug!("deleted shape {index} ({:?})", removed.map(|s| s.kind()));
        self.selected = None;
        self.gesture = Gesture::Idle;
        true
    }

    /// Hover handling shared by moving and deleting mode: the cursor shows
    /// `over` above a shape and `Default` elsewhere, and nothing else changes.
    fn update_hover_cursor(&mut self, position: Point, over: Cursor) -> bool {
        let next = if self.shapes.topmost_hit_at(position).is_some() {
            over
        } else {
            Cursor::Default
        };
        let changed = next != self.cursor;
        self.cursor = next;
        changed
    }
}
