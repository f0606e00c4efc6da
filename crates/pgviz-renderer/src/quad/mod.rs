//! Instanced filled-rectangle renderer. Draws buffer cells, single-pixel
//! points and label panels.

mod pipeline;
mod renderer;
mod types;

pub use renderer::QuadRenderer;
pub use types::{srgb_to_linear, surface_color, QuadInstance};

#[cfg(test)]
mod tests {
    use super::pipeline::SHADER_SOURCE;
    use super::types::*;
    use pgviz_common::Color;

    #[test]
    fn instance_layout_is_eight_floats() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 32);
        assert_eq!(std::mem::size_of::<Uniforms>(), 16);
    }

    #[test]
    fn instance_from_rect() {
        let q = QuadInstance::new(1.0, 2.0, 3.0, 4.0, [1.0; 4]);
        assert_eq!(q.rect, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn srgb_endpoints() {
        assert_eq!(srgb_to_linear(Color::BLACK), [0.0, 0.0, 0.0, 1.0]);
        let white = srgb_to_linear(Color::WHITE);
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    }

    #[test]
    fn srgb_midtone_darkens() {
        let [r, ..] = srgb_to_linear(Color::from_rgba(128, 0, 0, 255));
        assert!((r - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn surface_color_respects_format() {
        let c = Color::from_rgba(128, 128, 128, 255);
        assert_eq!(
            surface_color(c, wgpu::TextureFormat::Bgra8Unorm),
            c.to_f32_array()
        );
        assert_ne!(
            surface_color(c, wgpu::TextureFormat::Bgra8UnormSrgb),
            c.to_f32_array()
        );
    }

    #[test]
    fn shader_has_entry_points() {
        assert!(SHADER_SOURCE.contains("fn vs_main"));
        assert!(SHADER_SOURCE.contains("fn fs_main"));
    }
}
