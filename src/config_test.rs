#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_constants() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.min_draw_size, 2.0);
    assert_eq!(cfg.anchor_radius, 6.0);
    assert_eq!(cfg.selection_padding, 6.0);
    assert_eq!(cfg.rotate_handle_offset, 16.0);
    assert_eq!(cfg.rotate_handle_radius, 6.0);
    assert_eq!(cfg.default_color, "#b9b3fc");
}

#[test]
fn empty_lookup_gives_defaults() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn overrides_are_parsed() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[
        ("SHAPEBOARD_MIN_DRAW_SIZE", "5"),
        ("SHAPEBOARD_ANCHOR_RADIUS", " 8.5 "),
        ("SHAPEBOARD_SELECTION_PADDING", "0"),
        ("SHAPEBOARD_ROTATE_HANDLE_OFFSET", "24"),
        ("SHAPEBOARD_ROTATE_HANDLE_RADIUS", "7"),
        ("SHAPEBOARD_DEFAULT_COLOR", "#123456"),
    ]))
    .unwrap();
    assert_eq!(cfg.min_draw_size, 5.0);
    assert_eq!(cfg.anchor_radius, 8.5);
    assert_eq!(cfg.selection_padding, 0.0);
    assert_eq!(cfg.rotate_handle_offset, 24.0);
    assert_eq!(cfg.rotate_handle_radius, 7.0);
    assert_eq!(cfg.default_color, "#123456");
}

#[test]
fn blank_color_falls_back_to_default() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[("SHAPEBOARD_DEFAULT_COLOR", "  ")])).unwrap();
    assert_eq!(cfg.default_color, "#b9b3fc");
}

#[test]
fn non_numeric_override_is_error() {
    let err = EditorConfig::from_lookup(lookup_from(&[("SHAPEBOARD_ANCHOR_RADIUS", "big")])).unwrap_err();
    assert!(matches!(err, EditorError::ConfigParse(ref msg) if msg.contains("SHAPEBOARD_ANCHOR_RADIUS")));
}

#[test]
fn negative_override_is_error() {
    let err = EditorConfig::from_lookup(lookup_from(&[("SHAPEBOARD_MIN_DRAW_SIZE", "-1")])).unwrap_err();
    assert!(matches!(err, EditorError::ConfigParse(_)));
}

#[test]
fn infinite_override_is_error() {
    let err = EditorConfig::from_lookup(lookup_from(&[("SHAPEBOARD_SELECTION_PADDING", "inf")])).unwrap_err();
    assert!(matches!(err, EditorError::ConfigParse(_)));
}
