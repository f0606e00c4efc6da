//! Configuration schema types for pgviz.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod camera;
mod database;
mod grid;
mod keybind_config;
mod label;
mod logging;
mod palette;
mod performance;
mod window;

pub use camera::*;
pub use database::*;
pub use grid::*;
pub use keybind_config::*;
pub use label::*;
pub use logging::*;
pub use palette::*;
pub use performance::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for pgviz.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PgvizConfig {
    pub grid: GridConfig,
    pub camera: CameraConfig,
    pub palette: PaletteConfig,
    pub label: LabelConfig,
    pub database: DatabaseConfig,
    pub performance: PerformanceConfig,
    pub window: WindowConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}
