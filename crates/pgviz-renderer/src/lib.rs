//! Drawing for pgviz.
//!
//! [`FrameRenderer`] draws the buffer map and the hover label against the
//! [`Canvas`] trait. [`RenderState`] is the wgpu implementation of that
//! trait; [`RecordingCanvas`] is a headless one that records draw calls.

pub mod buffer_map;
pub mod canvas;
pub mod gpu;
pub mod palette;
pub mod perf;
pub mod quad;
pub mod render_state;
pub mod text;

pub use buffer_map::{FrameRenderer, LabelStyle, LABEL_BASE_WIDTH, LABEL_HEIGHT};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use gpu::{GpuContext, RendererError};
pub use palette::HeatPalette;
pub use perf::FrameTimer;
pub use quad::{QuadInstance, QuadRenderer};
pub use render_state::RenderState;
pub use text::TextRenderer;
