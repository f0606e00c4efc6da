//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// A bare key ("R", "Left", "=") needs no modifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub increase_cell_size: String,
    pub decrease_cell_size: String,
    pub reset_view: String,
    pub pan_left: String,
    pub pan_right: String,
    pub pan_up: String,
    pub pan_down: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            increase_cell_size: "=".into(),
            decrease_cell_size: "-".into(),
            reset_view: "R".into(),
            pan_left: "Left".into(),
            pan_right: "Right".into(),
            pan_up: "Up".into(),
            pan_down: "Down".into(),
            quit: "Escape".into(),
        }
    }
}
