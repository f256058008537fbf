//! Per-instance moon data uploaded to the GPU.

use lunaria_scene::phase::shader_phase;
use lunaria_scene::MoonInstance;

use crate::sphere::matrix::{self as mat, Mat4};

/// One moon, as the moon shader sees it.
///
/// Layout: model(mat4) + tint_phase(vec4) + params(vec4) = 96 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MoonInstanceRaw {
    /// Unit sphere to world (column-major).
    pub model: Mat4,
    /// Albedo tint rgb, normalized phase in w.
    pub tint_phase: [f32; 4],
    /// Facing sign in x, rest unused.
    pub params: [f32; 4],
}

impl MoonInstanceRaw {
    /// wgpu vertex buffer layout, step mode per instance.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MoonInstanceRaw>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            // model columns
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
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 32,
                shader_location: 5,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 48,
                shader_location: 6,
            },
            // tint_phase
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 64,
                shader_location: 7,
            },
            // params
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 80,
                shader_location: 8,
            },
        ],
    };

    pub fn from_instance(moon: &MoonInstance) -> Self {
        Self {
            model: model_matrix(moon),
            tint_phase: [
                moon.tint[0].clamp(0.0, 1.0),
                moon.tint[1].clamp(0.0, 1.0),
                moon.tint[2].clamp(0.0, 1.0),
                shader_phase(moon.phase),
            ],
            params: [moon.facing, 0.0, 0.0, 0.0],
        }
    }
}

/// Model = translate · rotate_y(yaw) · rotate_x(pitch) · scale(radius).
pub fn model_matrix(moon: &MoonInstance) -> Mat4 {
    let [x, y, z] = moon.position;
    let t = mat::translate(x, y, z);
    let ry = mat::rotate_y(moon.yaw);
    let rx = mat::rotate_x(moon.pitch);
    let s = mat::scale(moon.radius());
    mat::mul(&t, &mat::mul(&ry, &mat::mul(&rx, &s)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn moon() -> MoonInstance {
        MoonInstance {
            index: 3,
            position: [120.0, -10.0, -200.0],
            size: 80.0,
            phase: 15.0,
            yaw: 0.22,
            pitch: -0.08,
            light_dir: [0.0, 0.0, 1.0],
            tint: [1.0, 0.94, 0.835],
            facing: -1.0,
        }
    }

    #[test]
    fn instance_size_is_96_bytes() {
        assert_eq!(std::mem::size_of::<MoonInstanceRaw>(), 96);
        assert_eq!(MoonInstanceRaw::LAYOUT.array_stride, 96);
    }

    #[test]
    fn packs_tint_phase_and_facing() {
        let raw = MoonInstanceRaw::from_instance(&moon());
        assert_eq!(&raw.tint_phase[..3], &[1.0, 0.94, 0.835]);
        assert!((raw.tint_phase[3] - 0.5).abs() < 1e-6);
        assert_eq!(raw.params[0], -1.0);
    }

    #[test]
    fn model_places_center_and_scales_to_radius() {
        let m = moon();
        let model = model_matrix(&m);
        let center = mat::transform_point(&model, [0.0, 0.0, 0.0]);
        assert!((center[0] - 120.0).abs() < 1e-4);
        assert!((center[1] + 10.0).abs() < 1e-4);
        assert!((center[2] + 200.0).abs() < 1e-4);

        // Any surface point is one radius from the center.
        let p = mat::transform_point(&model, [0.6, 0.0, 0.8]);
        let d = ((p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2) + (p[2] - center[2]).powi(2)).sqrt();
        assert!((d - 40.0).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_tint_is_clamped() {
        let mut m = moon();
        m.tint = [1.3, -0.2, 0.5];
        let raw = MoonInstanceRaw::from_instance(&m);
        assert_eq!(&raw.tint_phase[..3], &[1.0, 0.0, 0.5]);
    }
}
