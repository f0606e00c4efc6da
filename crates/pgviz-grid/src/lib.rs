//! Buffer-map geometry: index ↔ cell mapping, camera, and picking.
//!
//! Everything here is pure and takes its state as explicit arguments, so
//! the renderer and the picker always agree on where a buffer is drawn.

pub mod camera;
pub mod mapper;
pub mod picker;

pub use camera::{CameraController, CameraState, PanState};
pub use mapper::{CellAddress, CellRect, GridConfig, ScreenPoint};
pub use picker::{pick, PickResult};
