//! Window title management: shows the source and live buffer counts.

use pgviz_common::SnapshotStats;

use super::core::PgvizApp;

impl PgvizApp {
    /// Update the window title with the latest snapshot stats and frame rate.
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };

        window.set_title(&format_title(
            &self.config.window.title,
            &self.source_label,
            self.last_stats,
            self.frame_loop.camera().cell_size(),
            self.timer.fps(),
        ));
    }
}

/// Format: "{title} - {source}" until the first snapshot arrives, then
/// "{title} - {source} - {total} buffers, {in_use} in use, {dirty} dirty, {cell}px, {fps} fps".
fn format_title(
    base: &str,
    source: &str,
    stats: Option<SnapshotStats>,
    cell_size: u32,
    fps: f64,
) -> String {
    match stats {
        None => format!("{base} - {source}"),
        Some(s) => format!(
            "{base} - {source} - {} buffers, {} in use, {} dirty, {cell_size}px, {fps:.1} fps",
            s.total, s.in_use, s.dirty
        ),
    }
}
