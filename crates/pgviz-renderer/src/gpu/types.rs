/// Anything that can stop the window from being drawn.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("cannot create window surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("no GPU adapter available (hardware or fallback)")]
    NoAdapter,

    #[error("cannot open GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("label text: {0}")]
    Text(String),
}

/// Surface size in physical pixels, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}
