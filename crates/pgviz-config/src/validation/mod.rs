//! Full configuration validation.
//!
//! Validates numeric ranges, keybind uniqueness, pointer button names and
//! palette colors. Errors from every section are collected into a single
//! `ConfigError`.

mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::palette::palette_errors;
use crate::schema::PgvizConfig;
use pgviz_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PgvizConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_keybinds(&config.keybinds) {
        errors.push(e.to_string());
    }

    misc::validate_grid(&mut errors, config);
    misc::validate_camera(&mut errors, config);
    misc::validate_label(&mut errors, config);
    misc::validate_performance(&mut errors, config);
    misc::validate_window(&mut errors, config);
    errors.extend(palette_errors(&config.palette));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
