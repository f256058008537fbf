use std::sync::Arc;

use image::RgbaImage;
use lunaria_config::LunariaConfig;
use lunaria_scene::{FrameInput, SceneContext, ShadingParams};
use wgpu::util::DeviceExt;
use winit::window::Window;

use super::batch::FrameBatch;
use super::helpers::log_first_frame;
use crate::gpu::{FrameUniforms, GpuContext, RendererError};
use crate::moon::MoonPipeline;
use crate::sphere::matrix::scene_perspective;
use crate::stars::StarPipeline;
use crate::surface::SurfaceTexture;

/// GPU context, pipelines, and the frame uniform block.
pub struct RenderState {
    pub gpu: GpuContext,
    pub clear_color: wgpu::Color,
    uniforms: FrameUniforms,
    uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    surface_texture: SurfaceTexture,
    stars: StarPipeline,
    moons: MoonPipeline,
    batch: FrameBatch,
}

impl RenderState {
    /// Create a fully initialized render state from a window and the
    /// pre-synthesized surface texture.
    pub async fn new(
        window: Arc<Window>,
        config: &LunariaConfig,
        surface_image: &RgbaImage,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.vsync).await?;

        let uniforms = FrameUniforms::from_shading(&ShadingParams::from_config(&config.shading));
        let uniform_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("frame uniforms"),
                contents: bytemuck::bytes_of(&uniforms),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let frame_layout = gpu
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("frame bind group layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(
                            std::mem::size_of::<FrameUniforms>() as u64,
                        ),
                    },
                    count: None,
                }],
            });

        let frame_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bind group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let surface_texture = SurfaceTexture::new(&gpu.device, &gpu.queue, surface_image);
        let stars = StarPipeline::new(&gpu.device, gpu.format(), &frame_layout);
        let moons = MoonPipeline::new(&gpu.device, gpu.format(), &frame_layout, &surface_texture);

        Ok(Self {
            gpu,
            clear_color: wgpu::Color::BLACK,
            uniforms,
            uniform_buffer,
            frame_bind_group,
            surface_texture,
            stars,
            moons,
            batch: FrameBatch::new(),
        })
    }

    /// Handle a window resize by reconfiguring the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Compose `scene` for `input` and render it.
    ///
    /// Returns `Ok(false)` when the frame was skipped because the surface
    /// had to be reconfigured or timed out.
    pub fn render_scene(
        &mut self,
        scene: &SceneContext,
        input: &FrameInput,
    ) -> Result<bool, RendererError> {
        scene.compose(input, &mut self.batch);
        self.render_frame()
    }

    /// Render the current batch: clear, stars, moons, present.
    pub fn render_frame(&mut self) -> Result<bool, RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(false);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface texture timed out, skipping frame");
                return Ok(false);
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let proj = scene_perspective(self.gpu.size.width as f32, self.gpu.size.height as f32);
        self.uniforms.update_camera(*self.batch.view(), proj);
        self.uniforms.update_light(self.batch.light_dir());
        self.gpu
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));

        self.stars
            .prepare(&self.gpu.device, &self.gpu.queue, self.batch.stars());
        self.moons
            .prepare(&self.gpu.device, &self.gpu.queue, self.batch.moons());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("lunaria frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("lunaria scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.gpu.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.stars.render(&mut pass, &self.frame_bind_group);
            self.moons
                .render(&mut pass, &self.frame_bind_group, &self.surface_texture);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(true)
    }
}
