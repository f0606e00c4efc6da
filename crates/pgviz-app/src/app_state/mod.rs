//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Collects input between frames and hands it to the
//! [`FrameLoop`](crate::frame_loop::FrameLoop) at the configured rate.

mod core;
mod event_handler;
mod frame;
mod init;
mod polling;
mod shutdown;
mod title;

pub use core::PgvizApp;
