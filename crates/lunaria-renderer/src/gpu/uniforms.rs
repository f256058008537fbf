//! Per-frame uniform block shared by the star and moon passes.
//!
//! Bound at group 0. Camera matrices change every frame; the shading
//! constants are fixed at startup from config.

use lunaria_scene::math::Vec3;
use lunaria_scene::ShadingParams;

use crate::sphere::matrix::{Mat4, IDENTITY};

/// GPU-side uniform buffer matching the WGSL `Frame` struct.
///
/// Layout: 2 × mat4 + 4 × vec4 = 192 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    /// World to view (column-major).
    pub view: Mat4,
    /// View to clip (column-major).
    pub proj: Mat4,
    /// Global light direction, xyz. Compared against view-space normals.
    pub light_dir: [f32; 4],
    /// edge, earthshine, diffuse, specular.
    pub shading: [f32; 4],
    /// shininess, rim strength, rim power, tint-and-rim flag (0 or 1).
    pub lighting: [f32; 4],
    /// Rim glow color, rgb.
    pub rim_color: [f32; 4],
}

impl FrameUniforms {
    /// Create uniforms from shading constants with identity camera matrices.
    pub fn from_shading(params: &ShadingParams) -> Self {
        let [rr, rg, rb] = params.rim_color;
        Self {
            view: IDENTITY,
            proj: IDENTITY,
            light_dir: [0.0, 0.0, 1.0, 0.0],
            shading: [
                params.edge,
                params.earthshine,
                params.diffuse,
                params.specular,
            ],
            lighting: [
                params.shininess,
                params.rim_strength,
                params.rim_power,
                if params.tint_and_rim { 1.0 } else { 0.0 },
            ],
            rim_color: [rr, rg, rb, 0.0],
        }
    }

    pub fn update_camera(&mut self, view: Mat4, proj: Mat4) {
        self.view = view;
        self.proj = proj;
    }

    pub fn update_light(&mut self, dir: Vec3) {
        self.light_dir = [dir[0], dir[1], dir[2], 0.0];
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_192_bytes() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 192);
    }

    #[test]
    fn uniforms_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<FrameUniforms>(), 4);
    }

    #[test]
    fn uniforms_from_default_shading() {
        let u = FrameUniforms::from_shading(&ShadingParams::default());
        assert!((u.shading[0] - 0.018).abs() < f32::EPSILON);
        assert!((u.shading[1] - 0.20).abs() < f32::EPSILON);
        assert!((u.shading[2] - 0.95).abs() < f32::EPSILON);
        assert!((u.shading[3] - 0.55).abs() < f32::EPSILON);
        assert!((u.lighting[0] - 28.0).abs() < f32::EPSILON);
        assert!((u.lighting[1] - 0.6).abs() < f32::EPSILON);
        assert!((u.lighting[2] - 3.0).abs() < f32::EPSILON);
        assert_eq!(u.lighting[3], 1.0);
        assert_eq!(u.rim_color, [0.4, 0.7, 1.0, 0.0]);
    }

    #[test]
    fn classic_shading_clears_rim_flag() {
        let params = ShadingParams {
            tint_and_rim: false,
            ..ShadingParams::default()
        };
        let u = FrameUniforms::from_shading(&params);
        assert_eq!(u.lighting[3], 0.0);
    }

    #[test]
    fn update_light_pads_w() {
        let mut u = FrameUniforms::from_shading(&ShadingParams::default());
        u.update_light([0.8, 0.1, 0.6]);
        assert_eq!(u.light_dir, [0.8, 0.1, 0.6, 0.0]);
    }

    #[test]
    fn bytemuck_cast_works() {
        let u = FrameUniforms::from_shading(&ShadingParams::default());
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 192);
    }
}
