//! The drawing surface seen by [`FrameRenderer`](crate::FrameRenderer).

use pgviz_common::Color;

/// Immediate-mode 2D drawing surface in pixel coordinates, origin top-left.
///
/// Implementations may batch calls and flush them later; callers only rely
/// on later calls painting over earlier ones.
pub trait Canvas {
    /// Current drawable size in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    fn draw_point(&mut self, x: f64, y: f64, color: Color);

    /// Advance width of `text` at `font_size`, in pixels.
    fn measure_text(&mut self, text: &str, font_size: f32) -> f32;

    /// Draw `text` with its top-left corner at `(x, y)`. `\n` starts a new line.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f32, color: Color);
}

/// One recorded [`Canvas`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Point {
        x: f64,
        y: f64,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font_size: f32,
        color: Color,
    },
}

/// Headless canvas that records every draw call.
///
/// Text is measured as a fixed advance of `0.6 * font_size` per character.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, e.g. between frames.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of cell draws (rects and points), excluding label panels.
    pub fn cell_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. } | DrawCommand::Point { .. }))
            .count()
    }

    /// All text drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_point(&mut self, x: f64, y: f64, color: Color) {
        self.commands.push(DrawCommand::Point { x, y, color });
    }

    fn measure_text(&mut self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * 0.6
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }
}
