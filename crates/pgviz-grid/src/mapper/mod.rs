//! Spatial mapping between buffer ids and grid cells.

mod calculation;
mod types;

pub use calculation::*;
pub use types::*;
