//! pgviz configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pgviz_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod keybinds;
pub mod keymap;
pub mod palette;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use palette::{resolve_palette, ResolvedPalette};
pub use schema::PgvizConfig;

use pgviz_common::ConfigError;
use std::path::Path;

/// Load and validate config.
///
/// With `path`, that file must exist. Without it, `config.toml` is read
/// from the OS config directory, creating a documented default on first run.
pub fn load_config(path: Option<&Path>) -> Result<PgvizConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PgvizConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&PgvizConfig::default());
        for section in [
            "grid",
            "camera",
            "palette",
            "label",
            "database",
            "performance",
            "window",
            "keybinds",
            "logging",
        ] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
        assert!(json.contains("\"vertical\""));
    }

    #[test]
    fn load_config_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[performance]\nframe_rate = 0\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("performance.frame_rate"));
    }

    #[test]
    fn load_config_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[grid]\ncell_size = 4\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.grid.cell_size, 4);
    }
}
