//! Graceful shutdown: end the database session, release the GPU surface.

use super::core::PgvizApp;

impl PgvizApp {
    /// Close the buffer source, then drop the renderer. Safe to call twice.
    pub(crate) fn shutdown(&mut self) {
        if self.source.is_none() && self.render_state.is_none() {
            return;
        }
        tracing::info!("Shutting down after {} frames", self.frame_loop.frames());

        if let Some(source) = self.source.take() {
            source.close();
        }

        self.render_state = None;

        tracing::info!("Shutdown complete");
    }
}
