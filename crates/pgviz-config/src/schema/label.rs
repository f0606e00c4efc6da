//! Hover label configuration types.

use serde::{Deserialize, Serialize};

/// Hover label configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Font size in pixels (valid range: 6-64).
    pub font_size: u32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { font_size: 15 }
    }
}
