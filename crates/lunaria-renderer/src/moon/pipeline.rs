//! wgpu render pipeline for the moon row.

use wgpu::util::DeviceExt;

use super::types::MoonInstanceRaw;
use crate::gpu::DEPTH_FORMAT;
use crate::shaders::MOON_WGSL;
use crate::sphere::{generate_sphere_mesh_lod, SphereLod, SphereVertex};
use crate::surface::SurfaceTexture;

const INITIAL_CAPACITY: usize = 32;

/// Pipeline, mesh, and instance buffer for the shaded moons.
pub struct MoonPipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
}

impl MoonPipeline {
    /// Create the moon pipeline.
    ///
    /// - `frame_layout`: layout for bind group 0 (shared `FrameUniforms`)
    /// - `texture`: the uploaded surface texture, bound at group 1
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        frame_layout: &wgpu::BindGroupLayout,
        texture: &SurfaceTexture,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("moon shader"),
            source: wgpu::ShaderSource::Wgsl(MOON_WGSL.into()),
        });

        let mesh = generate_sphere_mesh_lod(SphereLod::MOON);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("moon vertex buffer"),
            contents: bytemuck::cast_slice(&mesh),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = create_instance_buffer(device, INITIAL_CAPACITY);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("moon pipeline layout"),
            bind_group_layouts: &[frame_layout, texture.bind_group_layout()],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("moon pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SphereVertex::LAYOUT, MoonInstanceRaw::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_count: mesh.len() as u32,
            instance_buffer,
            instance_capacity: INITIAL_CAPACITY,
            instance_count: 0,
        }
    }

    /// Upload this frame's moons, growing the instance buffer if needed.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, moons: &[MoonInstanceRaw]) {
        if moons.len() > self.instance_capacity {
            self.instance_capacity = moons.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.instance_capacity);
            tracing::debug!(capacity = self.instance_capacity, "Moon instance buffer grown");
        }
        self.instance_count = moons.len() as u32;
        if !moons.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(moons));
        }
    }

    /// Draw all prepared moons into the render pass.
    pub fn render<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        frame_bind_group: &'pass wgpu::BindGroup,
        texture: &'pass SurfaceTexture,
    ) {
        if self.instance_count == 0 {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, frame_bind_group, &[]);
        pass.set_bind_group(1, texture.bind_group(), &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..self.instance_count);
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("moon instances"),
        size: (capacity * std::mem::size_of::<MoonInstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
