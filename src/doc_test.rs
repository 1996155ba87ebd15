#![allow(clippy::float_cmp)]

use super::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Geometry {
    Geometry::new(x, y, w, h)
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn geometry_new_has_zero_rotation() {
    let g = rect(1.0, 2.0, 3.0, 4.0);
    assert_eq!(g.rotation_deg, 0.0);
}

#[test]
fn geometry_center() {
    let g = rect(10.0, 20.0, 40.0, 30.0);
    assert_eq!(g.center(), Point::new(30.0, 35.0));
}

// =============================================================
// ShapeStore: create
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ShapeStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn create_assigns_sequential_ids_from_zero() {
    let mut store = ShapeStore::new();
    let a = store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    let b = store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    assert_eq!(a.id, 0);
    assert_eq!(b.id, 1);
}

#[test]
fn create_prepends_newest_first() {
    let mut store = ShapeStore::new();
    let a = store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    let b = store.create(rect(5.0, 5.0, 10.0, 10.0), "#fff");
    let ids: Vec<ShapeId> = store.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[test]
fn create_copies_geometry_and_color() {
    let mut store = ShapeStore::new();
    let shape = store.create(rect(10.0, 10.0, 40.0, 30.0), "#b9b3fc");
    assert_eq!(shape.x, 10.0);
    assert_eq!(shape.y, 10.0);
    assert_eq!(shape.width, 40.0);
    assert_eq!(shape.height, 30.0);
    assert_eq!(shape.color, "#b9b3fc");
    assert_eq!(store.get(shape.id), Some(&shape));
}

#[test]
fn create_keeps_rotation() {
    let mut store = ShapeStore::new();
    let mut g = rect(0.0, 0.0, 20.0, 10.0);
    g.rotation_deg = 30.0;
    let shape = store.create(g, "#fff");
    assert_eq!(shape.geometry(), g);
}

#[test]
fn ids_are_not_reused_after_remove() {
    let mut store = ShapeStore::new();
    let a = store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    store.remove(a.id);
    let b = store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    assert_ne!(a.id, b.id);
}

// =============================================================
// ShapeStore: replace_geometry
// =============================================================

#[test]
fn replace_geometry_updates_only_target() {
    let mut store = ShapeStore::new();
    let a = store.create(rect(0.0, 0.0, 10.0, 10.0), "#aaa");
    let b = store.create(rect(50.0, 50.0, 10.0, 10.0), "#bbb");

    let mut g = a.geometry();
    g.x = 5.0;
    g.rotation_deg = 45.0;
    let updated = store.replace_geometry(a.id, g).unwrap();

    assert_eq!(updated.x, 5.0);
    assert_eq!(updated.rotation_deg, 45.0);
    assert_eq!(updated.color, "#aaa");
    assert_eq!(store.get(b.id).unwrap().geometry(), b.geometry());
}

#[test]
fn replace_geometry_keeps_store_order() {
    let mut store = ShapeStore::new();
    let a = store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    let b = store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    store.replace_geometry(a.id, rect(1.0, 1.0, 1.0, 1.0)).unwrap();
    assert_eq!(store.shapes()[0].id, b.id);
    assert_eq!(store.shapes()[1].id, a.id);
}

#[test]
fn replace_geometry_missing_id_is_error() {
    let mut store = ShapeStore::new();
    store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    let err = store.replace_geometry(99, rect(1.0, 1.0, 1.0, 1.0)).unwrap_err();
    assert_eq!(err, EditorError::ShapeNotFound { id: 99 });
    assert_eq!(store.shapes()[0].x, 0.0);
}

// =============================================================
// ShapeStore: remove / get
// =============================================================

#[test]
fn remove_returns_shape() {
    let mut store = ShapeStore::new();
    let a = store.create(rect(0.0, 0.0, 10.0, 10.0), "#fff");
    let removed = store.remove(a.id).unwrap();
    assert_eq!(removed.id, a.id);
    assert!(store.is_empty());
}

#[test]
fn remove_missing_returns_none() {
    let mut store = ShapeStore::new();
    assert!(store.remove(3).is_none());
}

#[test]
fn get_missing_returns_none() {
    let store = ShapeStore::new();
    assert!(store.get(0).is_none());
}
