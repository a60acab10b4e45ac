//! Pointer input.

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Device that produced a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// A press, move or release at a point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    pub pointer: PointerKind,
}

impl PointerEvent {
    /// Mouse event at `(x, y)`.
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            pointer: PointerKind::Mouse,
        }
    }

    /// Touch event at `(x, y)`.
    pub fn touch(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            pointer: PointerKind::Touch,
        }
    }

    /// Is this a finger on the screen?
    pub fn is_touch(&self) -> bool {
        self.pointer == PointerKind::Touch
    }

    /// Position with `offset` applied to touch input only.
    pub fn adjusted(&self, offset: Point) -> Point {
        if self.is_touch() {
            self.position.offset(offset)
        } else {
            self.position
        }
    }
}
