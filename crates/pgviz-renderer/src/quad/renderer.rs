use tracing::{debug, warn};
use wgpu::util::DeviceExt;

use super::pipeline::{create_pipeline, uniform_layout};
use super::types::{QuadInstance, Uniforms, INITIAL_CAPACITY};

const INSTANCE_SIZE: u64 = std::mem::size_of::<QuadInstance>() as u64;

/// Instanced renderer for filled rectangles.
///
/// The instance buffer grows to the largest batch seen, up to the device's
/// maximum buffer size; instances past that limit are dropped.
pub struct QuadRenderer {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    capacity: u64,
    max_capacity: u64,
    instance_count: u32,
}

impl QuadRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad uniforms"),
            contents: bytemuck::bytes_of(&Uniforms {
                resolution: [1.0, 1.0],
                _pad: [0.0; 2],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let layout = uniform_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quad bind group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline = create_pipeline(device, format, &layout);

        let max_capacity = device.limits().max_buffer_size / INSTANCE_SIZE;
        let capacity = INITIAL_CAPACITY.min(max_capacity);

        Self {
            pipeline,
            instance_buffer: create_instance_buffer(device, capacity),
            uniform_buffer,
            bind_group,
            capacity,
            max_capacity,
            instance_count: 0,
        }
    }

    /// Upload `quads` and the viewport size for the next [`render`](Self::render).
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        quads: &[QuadInstance],
        viewport_width: f32,
        viewport_height: f32,
    ) {
        let wanted = quads.len() as u64;
        if wanted > self.capacity {
            let grown = wanted.next_power_of_two().min(self.max_capacity);
            debug!(from = self.capacity, to = grown, "growing quad instance buffer");
            self.instance_buffer = create_instance_buffer(device, grown);
            self.capacity = grown;
        }
        if wanted > self.capacity {
            warn!(
                wanted,
                capacity = self.capacity,
                "quad batch exceeds device buffer limit, truncating"
            );
        }

        let count = wanted.min(self.capacity) as usize;
        self.instance_count = count as u32;
        if count > 0 {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&quads[..count]),
            );
        }

        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                resolution: [viewport_width, viewport_height],
                _pad: [0.0; 2],
            }),
        );
    }

    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..6, 0..self.instance_count);
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("quad instances"),
        size: capacity.max(1) * INSTANCE_SIZE,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
