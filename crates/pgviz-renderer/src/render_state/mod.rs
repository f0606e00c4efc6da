//! The wgpu-backed [`Canvas`](crate::Canvas).

mod canvas;
mod helpers;
mod state;

pub use state::RenderState;
