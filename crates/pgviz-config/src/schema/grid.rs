//! Buffer grid configuration types.

use serde::{Deserialize, Serialize};

/// Grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Initial side length of one buffer cell in pixels (valid range: 1-512).
    pub cell_size: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 1 }
    }
}
