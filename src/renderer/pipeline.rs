//! WebGPU surface provider
//!
//! `lock` acquires the swapchain texture and hands out an empty vertex batch;
//! `unlock_and_present` uploads the batch, clears, draws and presents.

use glam::Vec2;
use wgpu::util::DeviceExt;

use super::vertex::Vertex;
use super::vertex_batch::VertexBatch;
use super::{Color, DrawTarget};
use crate::platform::SurfaceProvider;
use crate::sim::Rect;

/// One in-flight GPU frame
pub struct GpuFrame {
    batch: VertexBatch,
    output: wgpu::SurfaceTexture,
}

impl DrawTarget for GpuFrame {
    fn clear(&mut self, color: Color) {
        self.batch.clear(color);
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.batch.fill_rect(rect, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.batch.fill_circle(center, radius, color);
    }
}

/// Convert surface pixels (origin top-left, y down) to normalized device coordinates
pub fn pixel_to_ndc(x: f32, y: f32, width: u32, height: u32) -> (f32, f32) {
    (
        x / width as f32 * 2.0 - 1.0,
        1.0 - y / height as f32 * 2.0,
    )
}

/// Main render state
pub struct GpuSurface {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    /// Viewport size in pixels
    pub size: (u32, u32),
    /// Batch recycled between frames
    spare: Option<VertexBatch>,
}

impl GpuSurface {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("brick-breaker-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("Surface configured: {}x{} {:?}", width, height, surface_format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
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
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            size: (width, height),
            spare: None,
        })
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Convert a batch to NDC and upload it
    fn upload(&self, batch: &VertexBatch) -> (wgpu::Buffer, u32) {
        let (w, h) = self.size;
        let ndc_vertices: Vec<Vertex> = batch
            .vertices()
            .iter()
            .map(|v| {
                let (x, y) = pixel_to_ndc(v.position[0], v.position[1], w, h);
                Vertex::new(x, y, v.color)
            })
            .collect();

        let buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("vertex_buffer"),
                contents: bytemuck::cast_slice(&ndc_vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        (buffer, ndc_vertices.len() as u32)
    }
}

impl SurfaceProvider for GpuSurface {
    type Target = GpuFrame;

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn lock(&mut self) -> Option<GpuFrame> {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.reconfigure();
                return None;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                return None;
            }
            Err(e) => {
                log::warn!("Surface acquire error: {:?}", e);
                return None;
            }
        };

        let mut batch = self.spare.take().unwrap_or_default();
        batch.reset();
        Some(GpuFrame { batch, output })
    }

    fn unlock_and_present(&mut self, frame: GpuFrame) {
        let GpuFrame { batch, output } = frame;
        let (vertex_buffer, vertex_count) = self.upload(&batch);
        let [r, g, b, a] = batch.clear_color();

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if vertex_count > 0 {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                render_pass.draw(0..vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.spare = Some(batch);
    }
}
