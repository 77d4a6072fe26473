//! Pointer event types delivered by the windowing layer.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer event in canvas coordinates. Only the left button drives
/// gestures; other buttons are ignored by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Move { position: Point },
    Up { position: Point, button: MouseButton },
}

impl PointerEvent {
    /// Left-button press at `position`.
    pub fn left_down(position: Point) -> Self {
        Self::Down {
            position,
            button: MouseButton::Left,
        }
    }

    /// Left-button release at `position`.
    pub fn left_up(position: Point) -> Self {
        Self::Up {
            position,
            button: MouseButton::Left,
        }
    }

    /// The position carried by any event variant.
    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position, .. } | Self::Move { position } | Self::Up { position, .. } => {
                position
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let p = Point::new(3, 4);
        assert_eq!(PointerEvent::left_down(p).position(), p);
        assert_eq!(PointerEvent::Move { position: p }.position(), p);
        assert_eq!(PointerEvent::left_up(p).position(), p);
    }

    #[test]
    fn test_left_helpers_use_left_button() {
        assert_eq!(
            PointerEvent::left_down(Point::ZERO),
            PointerEvent::Down {
                position: Point::ZERO,
                button: MouseButton::Left,
            }
        );
    }
}
