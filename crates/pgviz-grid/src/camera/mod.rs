//! Camera pan and discrete cell-size zoom.

mod controller;
mod types;

pub use controller::CameraController;
pub use types::*;
