//! Where the config file lives, and writing the first-run template.

use std::fs;
use std::path::{Path, PathBuf};

use pgviz_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "pgviz";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/pgviz/config.toml`, e.g. `~/.config/pgviz/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory (is $HOME set?)".into()))
}

fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// Write the commented template to `path`, creating missing parent
/// directories. An existing file is left as it is.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }

    let io_error = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {what} {}: {e}", at.display()))
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| io_error("create directory", dir, e))?;
    }
    fs::write(path, default_config_toml()).map_err(|e| io_error("write template to", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
