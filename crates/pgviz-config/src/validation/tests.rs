//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&PgvizConfig::default()).is_ok());
}

#[test]
fn catches_cell_size_zero() {
    let mut config = PgvizConfig::default();
    config.grid.cell_size = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.cell_size"));
}

#[test]
fn catches_cell_size_too_large() {
    let mut config = PgvizConfig::default();
    config.grid.cell_size = 513;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_frame_rate_out_of_range() {
    let mut config = PgvizConfig::default();
    config.performance.frame_rate = 61;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("performance.frame_rate"));
}

#[test]
fn catches_label_font_size() {
    let mut config = PgvizConfig::default();
    config.label.font_size = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("label.font_size"));
}

#[test]
fn catches_window_size() {
    let mut config = PgvizConfig::default();
    config.window.width = 0;
    config.window.height = 20000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("window.height"));
}

#[test]
fn catches_unknown_pan_button() {
    let mut config = PgvizConfig::default();
    config.camera.pan_button = "back".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("camera.pan_button"));
}

#[test]
fn pan_button_is_case_insensitive() {
    let mut config = PgvizConfig::default();
    config.camera.pan_button = "Middle".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bad_palette_entry() {
    let mut config = PgvizConfig::default();
    config.palette.colors[3] = "green".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.colors[3]"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PgvizConfig::default();
    config.grid.cell_size = 0;
    config.performance.frame_rate = 0;
    config.keybinds.pan_up = "Down".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.cell_size"));
    assert!(err.contains("performance.frame_rate"));
    assert!(err.contains("duplicate keybind"));
}

#[test]
fn catches_keybinds_that_differ_only_by_alias() {
    let mut config = PgvizConfig::default();
    config.keybinds.increase_cell_size = "Equal".into();
    config.keybinds.quit = "=".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate keybind"));
    assert!(err.contains("increase_cell_size"));
}
