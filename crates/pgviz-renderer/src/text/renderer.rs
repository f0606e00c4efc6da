use glyphon::{
    Attrs, Buffer as TextBuffer, Cache, Color as GlyphonColor, Family, FontSystem, Metrics,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds,
    TextRenderer as GlyphonRenderer, Viewport,
};
use pgviz_common::Color;

use crate::gpu::RendererError;

/// Line height as a multiple of font size; four label lines at 15px fit
/// inside the 70px panel.
const LINE_SPACING: f32 = 1.0;

struct QueuedText {
    buffer: TextBuffer,
    left: f32,
    top: f32,
    color: GlyphonColor,
}

/// glyphon-backed text drawing, batched per frame.
///
/// [`queue`](Self::queue) shapes text immediately; [`prepare`](Self::prepare)
/// uploads every queued string and [`render`](Self::render) draws them.
pub struct TextRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    atlas: TextAtlas,
    viewport: Viewport,
    renderer: GlyphonRenderer,
    queued: Vec<QueuedText>,
}

impl TextRenderer {
    /// Create a text renderer using system fonts.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let font_system = FontSystem::new();
        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let viewport = Viewport::new(device, &cache);
        let renderer =
            GlyphonRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        Self {
            font_system,
            swash_cache: SwashCache::new(),
            atlas,
            viewport,
            renderer,
            queued: Vec::new(),
        }
    }

    fn shape(&mut self, text: &str, font_size: f32, color: Option<GlyphonColor>) -> TextBuffer {
        let metrics = Metrics::new(font_size, font_size * LINE_SPACING);
        let mut attrs = Attrs::new().family(Family::SansSerif);
        if let Some(color) = color {
            attrs = attrs.color(color);
        }
        let mut buffer = TextBuffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    /// Widest line of `text` at `font_size`, in pixels.
    pub fn measure(&mut self, text: &str, font_size: f32) -> f32 {
        let buffer = self.shape(text, font_size, None);
        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
    }

    /// Shape `text` for drawing at `(left, top)` in the next frame.
    pub fn queue(&mut self, text: &str, left: f32, top: f32, font_size: f32, color: Color) {
        let color = GlyphonColor::rgba(color.r, color.g, color.b, color.a);
        let buffer = self.shape(text, font_size, Some(color));
        self.queued.push(QueuedText {
            buffer,
            left,
            top,
            color,
        });
    }

    /// Upload glyphs for all queued text.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
    ) -> Result<(), RendererError> {
        self.viewport.update(queue, Resolution { width, height });

        let bounds = TextBounds {
            left: 0,
            top: 0,
            right: width as i32,
            bottom: height as i32,
        };
        let areas = self.queued.iter().map(|text| TextArea {
            buffer: &text.buffer,
            left: text.left,
            top: text.top,
            scale: 1.0,
            bounds,
            default_color: text.color,
            custom_glyphs: &[],
        });

        self.renderer
            .prepare(
                device,
                queue,
                &mut self.font_system,
                &mut self.atlas,
                &self.viewport,
                areas,
                &mut self.swash_cache,
            )
            .map_err(|e| RendererError::Text(e.to_string()))
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) -> Result<(), RendererError> {
        self.renderer
            .render(&self.atlas, &self.viewport, pass)
            .map_err(|e| RendererError::Text(e.to_string()))
    }

    /// Drop this frame's text and evict unused glyphs from the atlas.
    pub fn finish_frame(&mut self) {
        self.queued.clear();
        self.atlas.trim();
    }
}
