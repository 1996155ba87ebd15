//! Document model: rectangles and the ordered store that owns them.
//!
//! `Shape` is the record the host renders. `Geometry` is the mutable part of a
//! shape (position, size, rotation) and is what the transform functions take
//! and return. `ShapeStore` owns every shape, keeps them in hit-test order
//! (newest first) and hands out ids that are never reused.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::error::EditorError;

/// Unique identifier for a shape.
pub type ShapeId = u64;

/// Position, size and rotation of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Left edge of the unrotated box in logical coordinates.
    pub x: f64,
    /// Top edge of the unrotated box in logical coordinates.
    pub y: f64,
    /// Width of the box. Never negative.
    pub width: f64,
    /// Height of the box. Never negative.
    pub height: f64,
    /// Clockwise rotation in degrees around the box center. Not normalized.
    pub rotation_deg: f64,
}

impl Geometry {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height, rotation_deg: 0.0 }
    }

    /// Center of the unrotated box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A rectangle on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation_deg: f64,
    /// Display color; opaque to the editor core.
    pub color: String,
}

impl Shape {
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation_deg: self.rotation_deg,
        }
    }

    fn set_geometry(&mut self, geometry: Geometry) {
        self.x = geometry.x;
        self.y = geometry.y;
        self.width = geometry.width;
        self.height = geometry.height;
        self.rotation_deg = geometry.rotation_deg;
    }
}

/// In-memory store of shapes, ordered newest first.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shape from `geometry` and put it at the front of the store.
    ///
    /// Returns a copy of the inserted shape.
    pub fn create(&mut self, geometry: Geometry, color: &str) -> Shape {
        let id = self.next_id;
        self.next_id += 1;
        let shape = Shape {
            id,
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
            height: geometry.height,
            rotation_deg: geometry.rotation_deg,
            color: color.to_owned(),
        };
        self.shapes.insert(0, shape.clone());
        shape
    }

    /// Replace the geometry of the shape with `id`, returning the updated shape.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ShapeNotFound`] if no shape has that id; the store
    /// is left untouched.
    pub fn replace_geometry(&mut self, id: ShapeId, geometry: Geometry) -> Result<Shape, EditorError> {
        let shape = self
            .shapes
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(EditorError::ShapeNotFound { id })?;
        shape.set_geometry(geometry);
        Ok(shape.clone())
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// All shapes in store order (newest first).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
