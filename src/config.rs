//! Editor tuning knobs, with optional overrides from environment variables.

use crate::consts::{
    ANCHOR_RADIUS, DEFAULT_SHAPE_COLOR, MIN_DRAW_SIZE, ROTATE_HANDLE_OFFSET, ROTATE_HANDLE_RADIUS, SELECTION_PADDING,
};
use crate::error::EditorError;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// A drawn rectangle narrower or shorter than this is discarded.
    pub min_draw_size: f64,
    pub anchor_radius: f64,
    pub selection_padding: f64,
    pub rotate_handle_offset: f64,
    pub rotate_handle_radius: f64,
    /// Color given to new shapes.
    pub default_color: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_draw_size: MIN_DRAW_SIZE,
            anchor_radius: ANCHOR_RADIUS,
            selection_padding: SELECTION_PADDING,
            rotate_handle_offset: ROTATE_HANDLE_OFFSET,
            rotate_handle_radius: ROTATE_HANDLE_RADIUS,
            default_color: DEFAULT_SHAPE_COLOR.to_owned(),
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional (defaults from [`crate::consts`]):
    /// - `SHAPEBOARD_MIN_DRAW_SIZE`
    /// - `SHAPEBOARD_ANCHOR_RADIUS`
    /// - `SHAPEBOARD_SELECTION_PADDING`
    /// - `SHAPEBOARD_ROTATE_HANDLE_OFFSET`
    /// - `SHAPEBOARD_ROTATE_HANDLE_RADIUS`
    /// - `SHAPEBOARD_DEFAULT_COLOR`
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ConfigParse`] if a numeric override is not a
    /// finite, non-negative number.
    pub fn from_env() -> Result<Self, EditorError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. See [`EditorConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Same as [`EditorConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EditorError> {
        let defaults = Self::default();
        Ok(Self {
            min_draw_size: parse_length(&lookup, "SHAPEBOARD_MIN_DRAW_SIZE", defaults.min_draw_size)?,
            anchor_radius: parse_length(&lookup, "SHAPEBOARD_ANCHOR_RADIUS", defaults.anchor_radius)?,
            selection_padding: parse_length(&lookup, "SHAPEBOARD_SELECTION_PADDING", defaults.selection_padding)?,
            rotate_handle_offset: parse_length(&lookup, "SHAPEBOARD_ROTATE_HANDLE_OFFSET", defaults.rotate_handle_offset)?,
            rotate_handle_radius: parse_length(&lookup, "SHAPEBOARD_ROTATE_HANDLE_RADIUS", defaults.rotate_handle_radius)?,
            default_color: lookup("SHAPEBOARD_DEFAULT_COLOR")
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.default_color),
        })
    }
}

fn parse_length(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: f64) -> Result<f64, EditorError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| EditorError::ConfigParse(format!("{key}={raw:?}: {e}")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(EditorError::ConfigParse(format!("{key}={raw:?}: must be a finite, non-negative number")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
