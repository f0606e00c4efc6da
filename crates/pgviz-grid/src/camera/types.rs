use pgviz_common::Vec2;
use serde::{Deserialize, Serialize};

/// Pixel distance of one directional nudge, per unit of cell size.
pub const NUDGE_CELLS: f64 = 10.0;

/// World-to-screen transform shared by the renderer and the picker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Subtracted from world coordinates when drawing.
    pub pan: Vec2,
    /// Held at 1.0; drag deltas are divided by it.
    pub zoom: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

/// Drag state of the pan button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanState {
    Idle,
    /// Button held; `last` is the pointer position seen on the previous frame.
    Panning { last: Vec2 },
}
