use std::sync::Arc;

use pgviz_common::Color;
use tracing::{debug, warn};
use winit::window::Window;

use crate::gpu::{GpuContext, RendererError};
use crate::quad::{surface_color, QuadInstance, QuadRenderer};
use crate::text::TextRenderer;

use super::helpers::{clear_color, log_first_frame};

/// GPU state for one window. Draw calls made through [`Canvas`] are
/// collected and flushed by [`present`](Self::present).
///
/// [`Canvas`]: crate::Canvas
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) quad: QuadRenderer,
    pub(super) text: TextRenderer,
    pub(super) quads: Vec<QuadInstance>,
    pub(super) clear: Color,
}

impl RenderState {
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let quad = QuadRenderer::new(&gpu.device, gpu.format());
        let text = TextRenderer::new(&gpu.device, &gpu.queue, gpu.format());

        Ok(Self {
            gpu,
            quad,
            text,
            quads: Vec::new(),
            clear: Color::BLACK,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub(super) fn push_quad(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let color = surface_color(color, self.gpu.format());
        self.quads.push(QuadInstance::new(x, y, width, height, color));
    }

    /// Draw everything collected since the last call and present it.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn present(&mut self) -> Result<(), RendererError> {
        let result = self.draw_frame();
        self.quads.clear();
        self.text.finish_frame();
        result
    }

    fn draw_frame(&mut self) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let width = self.gpu.size.width;
        let height = self.gpu.size.height;
        self.quad.prepare(
            &self.gpu.device,
            &self.gpu.queue,
            &self.quads,
            width as f32,
            height as f32,
        );
        self.text
            .prepare(&self.gpu.device, &self.gpu.queue, width, height)?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("pgviz frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pgviz frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(surface_color(
                            self.clear,
                            self.gpu.format(),
                        ))),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.quad.render(&mut pass);
            self.text.render(&mut pass)?;
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        log_first_frame(width, height, self.gpu.format());
        Ok(())
    }
}
