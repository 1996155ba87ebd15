#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn point_approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

fn shape_geometry() -> Geometry {
    Geometry::new(10.0, 10.0, 40.0, 30.0)
}

#[test]
fn hidden_overlay_shows_nothing() {
    let o = SelectionOverlay::hidden();
    assert!(!o.template.visible);
    assert!(o.anchors.is_empty());
    assert!(o.rotation_handle.is_none());
}

#[test]
fn drawing_overlay_is_unpadded_preview() {
    let o = SelectionOverlay::drawing(&shape_geometry());
    assert!(o.template.visible);
    assert_eq!(o.template.x, 10.0);
    assert_eq!(o.template.width, 40.0);
    assert!(o.anchors.is_empty());
    assert!(o.rotation_handle.is_none());
}

#[test]
fn selection_template_is_padded() {
    let o = SelectionOverlay::for_selection(&shape_geometry(), &EditorConfig::default());
    assert!(o.template.visible);
    assert_eq!(o.template.x, 4.0);
    assert_eq!(o.template.y, 4.0);
    assert_eq!(o.template.width, 52.0);
    assert_eq!(o.template.height, 42.0);
}

#[test]
fn selection_anchors_sit_on_padded_corners() {
    let o = SelectionOverlay::for_selection(&shape_geometry(), &EditorConfig::default());
    assert_eq!(o.anchors.len(), 4);
    let centers: Vec<Point> = o.anchors.iter().map(|c| c.center).collect();
    assert_eq!(
        centers,
        vec![
            Point::new(4.0, 4.0),
            Point::new(4.0, 46.0),
            Point::new(56.0, 4.0),
            Point::new(56.0, 46.0),
        ]
    );
    assert!(o.anchors.iter().all(|c| c.radius == 6.0));
}

#[test]
fn selection_rotation_handle_above_top_edge() {
    let o = SelectionOverlay::for_selection(&shape_geometry(), &EditorConfig::default());
    let handle = o.rotation_handle.unwrap();
    assert!(point_approx_eq(handle.center, Point::new(30.0, -12.0)));
}

#[test]
fn selection_template_inherits_rotation() {
    let mut g = shape_geometry();
    g.rotation_deg = 30.0;
    let o = SelectionOverlay::for_selection(&g, &EditorConfig::default());
    assert_eq!(o.template.rotation_deg, 30.0);
}

#[test]
fn rotated_selection_rotates_handles_about_center() {
    let mut g = shape_geometry();
    g.rotation_deg = 90.0;
    let o = SelectionOverlay::for_selection(&g, &EditorConfig::default());

    // Center is (30, 25). Top-left padded corner (4, 4) is offset (-26, -21);
    // a quarter turn clockwise maps it to (21, -26) from the center.
    let tl = o.anchor(Anchor::TopLeft).unwrap();
    assert!(point_approx_eq(tl.center, Point::new(51.0, -1.0)));

    // Handle at (30, -12) is 37 above center; it ends up 37 to the right.
    let handle = o.rotation_handle.unwrap();
    assert!(point_approx_eq(handle.center, Point::new(67.0, 25.0)));
}

#[test]
fn overlay_respects_config() {
    let config = EditorConfig {
        selection_padding: 0.0,
        anchor_radius: 3.0,
        rotate_handle_offset: 10.0,
        rotate_handle_radius: 4.0,
        ..EditorConfig::default()
    };
    let o = SelectionOverlay::for_selection(&shape_geometry(), &config);
    assert_eq!(o.anchor(Anchor::BottomRight).unwrap().center, Point::new(50.0, 40.0));
    assert_eq!(o.anchor(Anchor::BottomRight).unwrap().radius, 3.0);
    let handle = o.rotation_handle.unwrap();
    assert_eq!(handle.radius, 4.0);
    assert!(point_approx_eq(handle.center, Point::new(30.0, 0.0)));
}

#[test]
fn anchor_lookup_on_hidden_overlay_is_none() {
    assert!(SelectionOverlay::hidden().anchor(Anchor::TopLeft).is_none());
}
