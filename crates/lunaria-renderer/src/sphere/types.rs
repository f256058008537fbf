//! Sphere mesh vertex types and buffer layout.

/// A single vertex of the unit sphere mesh.
///
/// Layout: position(vec3) + normal(vec3) + uv(vec2) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl SphereVertex {
    /// wgpu vertex buffer layout for `SphereVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SphereVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            // uv: vec2<f32> at offset 24
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 24,
                shader_location: 2,
            },
        ],
    };
}

/// Sphere tessellation presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereLod {
    pub latitudes: u32,
    pub longitudes: u32,
}

impl SphereLod {
    /// Moon detail.
    pub const MOON: Self = Self {
        latitudes: 72,
        longitudes: 72,
    };
    /// Star detail.
    pub const STAR: Self = Self {
        latitudes: 6,
        longitudes: 6,
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertex_size_is_32_bytes() {
        assert_eq!(std::mem::size_of::<SphereVertex>(), 32);
    }

    #[test]
    fn sphere_vertex_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<SphereVertex>(), 4);
    }

    #[test]
    fn sphere_lod_presets() {
        assert_eq!(SphereLod::MOON.latitudes, 72);
        assert_eq!(SphereLod::MOON.longitudes, 72);
        assert_eq!(SphereLod::STAR.latitudes, 6);
        assert_eq!(SphereLod::STAR.longitudes, 6);
    }

    #[test]
    fn layout_stride_matches_struct() {
        assert_eq!(SphereVertex::LAYOUT.array_stride, 32);
        assert_eq!(SphereVertex::LAYOUT.attributes.len(), 3);
    }
}
