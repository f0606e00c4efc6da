use std::sync::atomic::{AtomicBool, Ordering};

/// Log the first presented frame, once per process.
pub(super) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: AtomicBool = AtomicBool::new(false);
    if !PRESENTED.swap(true, Ordering::Relaxed) {
        tracing::info!("first frame presented ({width}x{height}, format={format:?})");
    }
}

pub(super) fn clear_color(components: [f32; 4]) -> wgpu::Color {
    let [r, g, b, a] = components.map(f64::from);
    wgpu::Color { r, g, b, a }
}
