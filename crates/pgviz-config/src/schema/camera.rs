//! Camera and pointer configuration types.

use pgviz_common::PanAxis;
use serde::{Deserialize, Serialize};

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Axes a mouse drag may pan along.
    pub pan_axis: PanAxis,
    /// Mouse button that pans while held: "left", "right" or "middle".
    pub pan_button: String,
    /// Whether the reset keybind also restores the startup cell size.
    pub reset_restores_cell_size: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pan_axis: PanAxis::Vertical,
            pan_button: "right".into(),
            reset_restores_cell_size: false,
        }
    }
}
