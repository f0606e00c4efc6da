//! Reading `config.toml` into [`PgvizConfig`].

use std::fs;
use std::path::Path;

use pgviz_common::ConfigError;
use tracing::{debug, info};

use super::paths::{create_default_config, default_config_path};
use crate::schema::PgvizConfig;

/// Parse the TOML file at `path`. Absent keys and sections take their
/// defaults. Values are not range-checked here; see [`crate::load_config`].
pub fn load_from_path(path: &Path) -> Result<PgvizConfig, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("cannot read {}: {e}", path.display())))?;

    let config = toml::from_str::<PgvizConfig>(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    debug!(path = %path.display(), "config parsed");
    Ok(config)
}

/// Read the per-user config, writing the commented template first if there
/// is none yet. A freshly written template yields the built-in defaults.
pub fn load_default() -> Result<PgvizConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }

    info!(path = %path.display(), "first run, writing default config");
    create_default_config(&path)?;
    Ok(PgvizConfig::default())
}
