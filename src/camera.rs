//! Coordinate mapping between device (client) pixels and the canvas's logical space.
//!
//! The host hands every pointer event the canvas surface's current screen
//! transform. Only scale and translation are modelled; the canvas is never
//! rotated or skewed on screen.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in either device or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The logical rectangle a canvas surface displays (an SVG-style `viewBox`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the canvas surface sits on screen and which logical area it shows.
///
/// This is what a host measures from its layout (the element's client rect and
/// `viewBox`); [`SurfaceLayout::transform`] turns it into a [`ScreenTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
}

impl SurfaceLayout {
    #[must_use]
    pub fn transform(&self) -> ScreenTransform {
        ScreenTransform::from_client_rect(self.left, self.top, self.width, self.height, self.view_box)
    }
}

/// Logical-to-screen transform of the canvas surface.
///
/// `screen = logical * scale + offset`, per axis. Mapping a pointer event runs
/// this in reverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ScreenTransform {
    /// Logical space equals client space.
    #[must_use]
    pub fn identity() -> Self {
        Self { scale_x: 1.0, scale_y: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }

    /// Build the transform for a surface laid out at `left`/`top` with the given
    /// on-screen size that displays `view`.
    ///
    /// A surface with no on-screen area (not yet laid out) yields a transform
    /// that is not invertible, so every event mapped through it is dropped.
    #[must_use]
    pub fn from_client_rect(left: f64, top: f64, width: f64, height: f64, view: ViewBox) -> Self {
        if view.width <= 0.0 || view.height <= 0.0 {
            return Self { scale_x: 0.0, scale_y: 0.0, offset_x: left, offset_y: top };
        }
        let scale_x = width / view.width;
        let scale_y = height / view.height;
        Self {
            scale_x,
            scale_y,
            offset_x: left - view.min_x * scale_x,
            offset_y: top - view.min_y * scale_y,
        }
    }

    /// Whether the transform can be inverted.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        [self.scale_x, self.scale_y, self.offset_x, self.offset_y]
            .iter()
            .all(|v| v.is_finite())
            && self.scale_x != 0.0
            && self.scale_y != 0.0
    }

    /// Convert a client-space point to logical coordinates.
    ///
    /// Returns `None` when the transform is degenerate or the mapped point
    /// overflows; callers ignore the event.
    #[must_use]
    pub fn client_to_logical(&self, client: Point) -> Option<Point> {
        if !self.is_invertible() {
            return None;
        }
        let x = (client.x - self.offset_x) / self.scale_x;
        let y = (client.y - self.offset_y) / self.scale_y;
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        Some(Point { x, y })
    }
}
