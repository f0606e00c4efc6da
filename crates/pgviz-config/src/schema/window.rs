//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial inner width in logical pixels (valid range: 1-16384).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 1-16384).
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            title: "PG Shared Buffer Visualizer".into(),
        }
    }
}
