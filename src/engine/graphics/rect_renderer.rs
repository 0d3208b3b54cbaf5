use std::borrow::Cow;
use wgpu::util::DeviceExt;
use log::debug;

use crate::engine::graphics::canvas::{Canvas, FilledRect};
use crate::engine::graphics::gpu::GpuContext;
use crate::engine::graphics::vertex::RectInstance;

/// Rectangles recorded for one frame, replayed by [`RectRenderer`].
#[derive(Debug, Default)]
pub struct RectBatch {
    clear_color: [u8; 4],
    instances: Vec<RectInstance>,
}

impl RectBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instances(&self) -> &[RectInstance] {
        &self.instances
    }

    pub fn clear_color(&self) -> [u8; 4] {
        self.clear_color
    }
}

impl Canvas for RectBatch {
    fn clear(&mut self, color: [u8; 4]) {
        self.clear_color = color;
        self.instances.clear();
    }

    fn fill_rect(&mut self, rect: &FilledRect) {
        self.instances.push(RectInstance::from(rect));
    }
}

/// Instanced quad renderer for the tile scene. Coordinates are in a fixed logical
/// screen space that is stretched over the window.
pub struct RectRenderer {
    pipeline: wgpu::RenderPipeline,
    _screen_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    capacity: usize,
}

impl RectRenderer {
    pub fn new(gpu: &GpuContext, logical_size: (f32, f32), capacity: usize) -> Self {
        let device = &gpu.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Rect Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("shaders/rect.wgsl"))),
        });

        let screen_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Screen Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(16),
                },
                count: None,
            }],
        });

        let screen_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Buffer"),
            contents: bytemuck::cast_slice(&[logical_size.0, logical_size.1, 0.0, 0.0]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Screen Bind Group"),
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Rect Pipeline Layout"),
            bind_group_layouts: &[&screen_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Rect Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[RectInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let capacity = capacity.max(1);
        let instance_buffer = Self::create_instance_buffer(device, capacity);

        Self {
            pipeline,
            _screen_buffer: screen_buffer,
            screen_bind_group,
            instance_buffer,
            capacity,
        }
    }

    fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Rect Instance Buffer"),
            size: (capacity * std::mem::size_of::<RectInstance>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn render(&mut self, gpu: &GpuContext, batch: &RectBatch) -> Result<(), wgpu::SurfaceError> {
        let instances = batch.instances();
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.instance_buffer = Self::create_instance_buffer(&gpu.device, self.capacity);
            debug!("Grew rect instance buffer to {} rects", self.capacity);
        }
        if !instances.is_empty() {
            gpu.queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }

        let frame = gpu.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Rect Encoder"),
        });

        let [r, g, b, a] = batch.clear_color().map(|c| c as f64 / 255.0);
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Rect Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !instances.is_empty() {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
                render_pass.draw(0..6, 0..instances.len() as u32);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_records_rects_in_order() {
        let mut batch = RectBatch::new();
        batch.clear([10, 20, 30, 255]);
        batch.fill_rect(&FilledRect::new(0.0, 0.0, 40.0, 40.0, [0, 255, 0, 255]));
        batch.fill_rect(&FilledRect::new(40.0, 0.0, 40.0, 40.0, [0, 0, 255, 255]));
        assert_eq!(batch.clear_color(), [10, 20, 30, 255]);
        assert_eq!(batch.instances().len(), 2);
        assert_eq!(batch.instances()[1].origin, [40.0, 0.0]);
    }

    #[test]
    fn clearing_drops_previous_frame() {
        let mut batch = RectBatch::new();
        batch.fill_rect(&FilledRect::new(0.0, 0.0, 1.0, 1.0, [0, 0, 0, 255]));
        batch.clear([0, 0, 0, 255]);
        assert!(batch.instances().is_empty());
    }
}
