use pgviz_common::Color;

/// One filled rectangle, uploaded as per-instance vertex data.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct QuadInstance {
    /// `[x, y, width, height]` in pixels.
    pub rect: [f32; 4],
    /// Linear RGBA, each component in `0.0..=1.0`.
    pub color: [f32; 4],
}

impl QuadInstance {
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: [f32; 4]) -> Self {
        Self {
            rect: [x as f32, y as f32, width as f32, height as f32],
            color,
        }
    }
}

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct Uniforms {
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}

/// Instances the buffer holds before its first growth.
pub(crate) const INITIAL_CAPACITY: u64 = 4096;

/// Convert an 8-bit sRGB color to the linear values an sRGB surface expects.
pub fn srgb_to_linear(color: Color) -> [f32; 4] {
    let channel = |c: u8| {
        let c = f32::from(c) / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [
        channel(color.r),
        channel(color.g),
        channel(color.b),
        f32::from(color.a) / 255.0,
    ]
}

/// Color components for a surface, linearized only when the format is sRGB.
pub fn surface_color(color: Color, format: wgpu::TextureFormat) -> [f32; 4] {
    if format.is_srgb() {
        srgb_to_linear(color)
    } else {
        color.to_f32_array()
    }
}
