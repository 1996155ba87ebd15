//! Selection overlay: the padded template outline, corner anchors, and rotation handle.
//!
//! The overlay is derived data. It is rebuilt from the selected shape after
//! every mutation and is what anchor/handle hit-testing runs against.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::config::EditorConfig;
use crate::doc::Geometry;
use crate::input::Anchor;
use crate::transform::rotate_point;

/// A circular handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// The dashed outline drawn around a selection or a rectangle being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateOutline {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_deg: f64,
    pub visible: bool,
}

impl TemplateOutline {
    /// Visible outline tracking a rectangle that is being drawn.
    #[must_use]
    pub fn preview(geometry: &Geometry) -> Self {
        Self {
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
            height: geometry.height,
            rotation_deg: geometry.rotation_deg,
            visible: true,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Everything the renderer needs to draw selection UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionOverlay {
    pub template: TemplateOutline,
    /// Corner anchors in [`Anchor::ALL`] order. Empty when nothing is selected.
    pub anchors: Vec<Circle>,
    pub rotation_handle: Option<Circle>,
}

impl SelectionOverlay {
    /// Overlay with nothing shown.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Overlay showing only a drawing preview.
    #[must_use]
    pub fn drawing(preview: &Geometry) -> Self {
        Self {
            template: TemplateOutline::preview(preview),
            anchors: Vec::new(),
            rotation_handle: None,
        }
    }

    /// Build the overlay for a selected shape.
    ///
    /// Anchors sit on the padded outline's corners and the rotation handle
    /// above its top edge; all of them are rotated about the outline's center
    /// by the shape's rotation.
    #[must_use]
    pub fn for_selection(geometry: &Geometry, config: &EditorConfig) -> Self {
        let pad = config.selection_padding;
        let template = TemplateOutline {
            x: geometry.x - pad,
            y: geometry.y - pad,
            width: geometry.width + 2.0 * pad,
            height: geometry.height + 2.0 * pad,
            rotation_deg: geometry.rotation_deg,
            visible: true,
        };
        let center = template.center();

        let anchors = Anchor::ALL
            .iter()
            .map(|anchor| {
                let (h, v) = anchor.flags();
                let corner = Point::new(
                    template.x + f64::from(h) * template.width,
                    template.y + f64::from(v) * template.height,
                );
                Circle {
                    center: rotate_point(corner, center, template.rotation_deg),
                    radius: config.anchor_radius,
                }
            })
            .collect();

        let handle = Point::new(center.x, template.y - config.rotate_handle_offset);
        let rotation_handle = Some(Circle {
            center: rotate_point(handle, center, template.rotation_deg),
            radius: config.rotate_handle_radius,
        });

        Self { template, anchors, rotation_handle }
    }

    /// Anchor circle for `anchor`, if anchors are shown.
    #[must_use]
    pub fn anchor(&self, anchor: Anchor) -> Option<&Circle> {
        self.anchors.get(anchor.index())
    }
}
