use pgviz_common::Color;

use crate::canvas::Canvas;

use super::state::RenderState;

impl Canvas for RenderState {
    fn size(&self) -> (u32, u32) {
        (self.gpu.size.width, self.gpu.size.height)
    }

    fn clear(&mut self, color: Color) {
        self.clear = color;
        self.quads.clear();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.push_quad(x, y, width, height, color);
    }

    fn draw_point(&mut self, x: f64, y: f64, color: Color) {
        self.push_quad(x, y, 1.0, 1.0, color);
    }

    fn measure_text(&mut self, text: &str, font_size: f32) -> f32 {
        self.text.measure(text, font_size)
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: f32, color: Color) {
        self.text.queue(text, x as f32, y as f32, font_size, color);
    }
}
