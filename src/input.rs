//! Input model: tools, anchors, pointer events, and the gesture state machine.
//!
//! `Tool` is chosen by the host and only read here. `InputState` is the active
//! gesture tracked between pointer-down and pointer-up; each drag variant
//! carries a `DragSession` holding the geometry captured at press time, so
//! every move recomputes from the same base instead of compounding on the
//! already-mutated shape.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, ScreenTransform};
use crate::doc::{Geometry, ShapeId};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tool {
    /// Draw a new rectangle by dragging.
    #[default]
    Rectangle,
    /// Select, move, resize, and rotate existing rectangles.
    Select,
}

/// One of the four corner handles of a selected shape.
///
/// Variants are declared in index order. Each anchor carries a
/// `(horizontal, vertical)` flag pair where `0` is the left/top edge and `1`
/// the right/bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// Flags `(0, 0)`.
    TopLeft,
    /// Flags `(0, 1)`.
    BottomLeft,
    /// Flags `(1, 0)`.
    TopRight,
    /// Flags `(1, 1)`.
    BottomRight,
}

impl Anchor {
    /// All anchors in index order.
    pub const ALL: [Anchor; 4] = [Self::TopLeft, Self::BottomLeft, Self::TopRight, Self::BottomRight];

    /// Position of this anchor in [`Anchor::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::BottomLeft => 1,
            Self::TopRight => 2,
            Self::BottomRight => 3,
        }
    }

    /// `(horizontal, vertical)` edge flags.
    #[must_use]
    pub fn flags(self) -> (u8, u8) {
        match self {
            Self::TopLeft => (0, 0),
            Self::BottomLeft => (0, 1),
            Self::TopRight => (1, 0),
            Self::BottomRight => (1, 1),
        }
    }

    /// Resize cursor shown while hovering or dragging this anchor.
    #[must_use]
    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::TopLeft | Self::BottomRight => CursorIcon::NwseResize,
            Self::BottomLeft | Self::TopRight => CursorIcon::NeswResize,
        }
    }
}

/// Cursor hint for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorIcon {
    Default,
    Move,
    Grabbing,
    NwseResize,
    NeswResize,
}

/// A pointer event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Device-space position (client pixels).
    pub client: Point,
    /// The canvas surface's screen transform at the time of the event.
    pub transform: ScreenTransform,
}

impl PointerEvent {
    #[must_use]
    pub fn new(client: Point, transform: ScreenTransform) -> Self {
        Self { client, transform }
    }

    /// Event whose client coordinates are already logical.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), ScreenTransform::identity())
    }

    /// Logical position of the event, or `None` if the transform is degenerate.
    #[must_use]
    pub fn logical(&self) -> Option<Point> {
        self.transform.client_to_logical(self.client)
    }
}

/// Per-drag context captured on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Id of the shape being manipulated.
    pub id: ShapeId,
    /// Logical pointer position at pointer-down.
    pub drag_start: Point,
    /// Geometry of the shape at pointer-down.
    pub start: Geometry,
    /// Most recent logical pointer position seen during the drag.
    pub last: Point,
}

impl DragSession {
    #[must_use]
    pub fn new(id: ShapeId, drag_start: Point, start: Geometry) -> Self {
        Self { id, drag_start, start, last: drag_start }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging out a new rectangle.
    Drawing {
        /// Logical point of the press; the rectangle's first corner.
        first_corner: Point,
        /// Most recent logical pointer position.
        last: Point,
    },
    /// The user is moving the selected shape.
    MovingShape(DragSession),
    /// The user is resizing the selected shape by one of its anchors.
    ResizingShape {
        session: DragSession,
        anchor: Anchor,
    },
    /// The user is rotating the selected shape with the rotation handle.
    RotatingShape(DragSession),
}

impl InputState {
    /// Whether a press has been seen and its release has not.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The id of the currently selected shape, if any.
    pub selected_id: Option<ShapeId>,
}
