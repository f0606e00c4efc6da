//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::PgvizConfig;
use pgviz_common::{ConfigError, PanAxis};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_pgviz_config.toml"));
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[grid]
cell_size = 8

[palette]
background = "#202020"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.grid.cell_size, 8);
    assert_eq!(config.palette.background, "#202020");
    // Defaults preserved
    assert_eq!(config.palette.colors.len(), 16);
    assert_eq!(config.camera.pan_axis, PanAxis::Vertical);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[label]\nfont_size = 200\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.label.font_size, 200);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pgviz").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.grid.cell_size, 1);
    assert_eq!(config.keybinds.quit, "Escape");
}

#[test]
fn template_matches_defaults() {
    let parsed: PgvizConfig = toml::from_str(default_config_toml()).unwrap();
    let defaults = PgvizConfig::default();
    assert_eq!(parsed.palette.colors, defaults.palette.colors);
    assert_eq!(parsed.window.title, defaults.window.title);
    assert_eq!(parsed.performance.frame_rate, defaults.performance.frame_rate);
    assert_eq!(parsed.camera.pan_button, defaults.camera.pan_button);
    assert_eq!(parsed.logging.level, defaults.logging.level);
}

#[test]
fn template_validates() {
    let parsed: PgvizConfig = toml::from_str(default_config_toml()).unwrap();
    assert!(crate::validation::validate(&parsed).is_ok());
}

#[test]
fn default_path_ends_with_pgviz_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("pgviz/config.toml"));
    }
}
