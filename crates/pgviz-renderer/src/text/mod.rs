//! Label text rendering via glyphon.

mod renderer;

pub use renderer::TextRenderer;
