use lunaria_scene::StarDraw;

/// One star, as the star shader sees it.
///
/// Layout: center_radius(vec4) + color(vec4) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarInstanceRaw {
    /// World position xyz, radius in w.
    pub center_radius: [f32; 4],
    /// Emissive gray, alpha 1.
    pub color: [f32; 4],
}

impl StarInstanceRaw {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<StarInstanceRaw>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 0,
                shader_location: 3,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 16,
                shader_location: 4,
            },
        ],
    };

    pub fn from_draw(star: &StarDraw) -> Self {
        let [x, y, z] = star.position;
        let gray = star.gray().clamp(0.0, 1.0);
        Self {
            center_radius: [x, y, z, star.radius],
            color: [gray, gray, gray, 1.0],
        }
    }
}
