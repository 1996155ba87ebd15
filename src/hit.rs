#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{Geometry, ShapeId, ShapeStore};
use crate::input::Anchor;
use crate::overlay::{Circle, SelectionOverlay};

/// Which part of a shape was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Anchor(Anchor),
    RotateHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shape_id: ShapeId,
    pub part: HitPart,
}

/// Strict containment in the unrotated box; boundary points are outside.
///
/// Rotation is ignored here, so a rotated shape is hit-tested against its
/// unrotated footprint.
#[must_use]
pub fn point_in_rect(p: Point, g: &Geometry) -> bool {
    let inside_x = g.x < p.x && p.x < g.x + g.width;
    let inside_y = g.y < p.y && p.y < g.y + g.height;
    inside_x && inside_y
}

/// Containment in a circle, boundary included.
#[must_use]
pub fn point_in_circle(p: Point, circle: &Circle) -> bool {
    let dx = p.x - circle.center.x;
    let dy = p.y - circle.center.y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// First shape in store order whose body contains `p`.
#[must_use]
pub fn shape_at(p: Point, store: &ShapeStore) -> Option<ShapeId> {
    store
        .shapes()
        .iter()
        .find(|s| point_in_rect(p, &s.geometry()))
        .map(|s| s.id)
}

/// Test what is under `p`, checking the selected shape's handles first.
///
/// Priority: anchors of the selection (in index order), then its rotation
/// handle, then shape bodies in store order.
#[must_use]
pub fn hit_test(p: Point, store: &ShapeStore, selected_id: Option<ShapeId>, overlay: &SelectionOverlay) -> Option<Hit> {
    if let Some(id) = selected_id {
        let anchor = Anchor::ALL
            .iter()
            .copied()
            .find(|a| overlay.anchor(*a).is_some_and(|c| point_in_circle(p, c)));
        if let Some(anchor) = anchor {
            return Some(Hit { shape_id: id, part: HitPart::Anchor(anchor) });
        }
        if overlay.rotation_handle.as_ref().is_some_and(|c| point_in_circle(p, c)) {
            return Some(Hit { shape_id: id, part: HitPart::RotateHandle });
        }
    }
    shape_at(p, store).map(|shape_id| Hit { shape_id, part: HitPart::Body })
}
