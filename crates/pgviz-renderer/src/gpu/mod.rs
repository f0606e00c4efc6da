//! wgpu setup: adapter, device and the window surface.

mod context;
mod types;

pub use context::*;
pub use types::*;
