//! Shared numeric constants for the editor core.

// ── Drawing ─────────────────────────────────────────────────────

/// Smallest width or height (logical units) a drawn rectangle must reach to be kept.
pub const MIN_DRAW_SIZE: f64 = 2.0;

/// Fill color assigned to freshly drawn rectangles.
pub const DEFAULT_SHAPE_COLOR: &str = "#b9b3fc";

// ── Selection overlay ───────────────────────────────────────────

/// Gap between a selected shape and its template outline, on every side.
pub const SELECTION_PADDING: f64 = 6.0;

/// Radius of the four corner anchor circles.
pub const ANCHOR_RADIUS: f64 = 6.0;

/// Distance from the top edge of the template outline to the rotation handle center.
pub const ROTATE_HANDLE_OFFSET: f64 = 16.0;

/// Radius of the rotation handle circle.
pub const ROTATE_HANDLE_RADIUS: f64 = 6.0;
