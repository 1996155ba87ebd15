use crate::doc::ShapeId;

/// Errors surfaced by the editor core.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EditorError {
    /// A drag session referenced a shape that is no longer in the store.
    #[error("shape {id} not found in store")]
    ShapeNotFound { id: ShapeId },
    /// A configuration override could not be parsed or is out of range.
    #[error("invalid editor config: {0}")]
    ConfigParse(String),
}
