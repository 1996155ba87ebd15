//! Geometry transforms driven by pointer drags.
//!
//! Every function here is pure: it takes the geometry captured when the drag
//! started plus the drag's start and current pointer positions, and returns
//! the replacement geometry. Nothing reads the shape's live state.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::camera::Point;
use crate::doc::Geometry;
use crate::input::Anchor;

/// Rotate `p` by `angle_deg` (clockwise on a y-down canvas) around `center`.
#[must_use]
pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Axis-aligned rectangle spanned by two opposite corners.
#[must_use]
pub fn preview_rect(first_corner: Point, current: Point) -> Geometry {
    Geometry::new(
        first_corner.x.min(current.x),
        first_corner.y.min(current.y),
        (first_corner.x - current.x).abs(),
        (first_corner.y - current.y).abs(),
    )
}

/// Translate `start` by the pointer offset. Size and rotation are kept.
#[must_use]
pub fn move_by(start: &Geometry, drag_start: Point, current: Point) -> Geometry {
    let offset = current - drag_start;
    Geometry {
        x: start.x + offset.x,
        y: start.y + offset.y,
        ..*start
    }
}

/// Resize `start` by dragging `anchor`. Rotation is kept.
///
/// Dragging an anchor past the opposite edge flips the box instead of
/// producing a negative extent.
#[must_use]
pub fn resize(start: &Geometry, anchor: Anchor, drag_start: Point, current: Point) -> Geometry {
    let offset = current - drag_start;
    let (h_flag, v_flag) = anchor.flags();
    let (x, width) = resize_axis(start.x, start.width, offset.x, h_flag);
    let (y, height) = resize_axis(start.y, start.height, offset.y, v_flag);
    Geometry { x, y, width, height, rotation_deg: start.rotation_deg }
}

/// One axis of [`resize`]: `flag == 0` drags the near (left/top) edge.
fn resize_axis(origin: f64, extent: f64, delta: f64, flag: u8) -> (f64, f64) {
    let (mut origin, mut extent) = if flag == 0 {
        (origin + delta, extent - delta)
    } else {
        (origin, extent + delta)
    };
    if extent < 0.0 {
        origin += extent;
        extent = extent.abs();
    }
    (origin, extent)
}

/// Point `start`'s rotation handle at `current`.
///
/// The angle is the absolute bearing of the pointer from the shape center,
/// measured clockwise from straight up, so it does not depend on where the
/// drag began.
#[must_use]
pub fn rotate(start: &Geometry, current: Point) -> Geometry {
    let center = start.center();
    let bearing = (current.y - center.y).atan2(current.x - center.x).to_degrees();
    Geometry {
        rotation_deg: bearing + 90.0,
        ..*start
    }
}
