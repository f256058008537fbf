//! CPU reference of the per-pixel phase shading model.
//!
//! `moon.wgsl` in the renderer evaluates the same function on the GPU;
//! this copy exists so the terminator and lighting terms can be tested.

use lunaria_config::schema::ShadingConfig;

use crate::math::{add, dot, lerp, mul, normalize, saturate, saturate3, scale, smoothstep, Vec3};

/// Shading constants shared by every moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingParams {
    /// Width of the terminator transition band.
    pub edge: f32,
    /// Ambient floor on the unlit side.
    pub earthshine: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
    /// Apply the albedo tint and the rim glow.
    pub tint_and_rim: bool,
    pub rim_color: Vec3,
    pub rim_strength: f32,
    pub rim_power: f32,
}

impl ShadingParams {
    pub fn from_config(config: &ShadingConfig) -> Self {
        Self {
            edge: config.edge,
            earthshine: config.earthshine,
            diffuse: config.diffuse,
            specular: config.specular,
            shininess: config.shininess,
            tint_and_rim: config.tint_and_rim,
            rim_color: config.rim_color,
            rim_strength: config.rim_strength,
            rim_power: config.rim_power,
        }
    }
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self::from_config(&ShadingConfig::default())
    }
}

/// One surface sample: view-space normal and view direction, plus the
/// albedo texel already fetched at the sample's UV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub normal: Vec3,
    pub view_dir: Vec3,
    pub albedo: Vec3,
}

/// `1 - |phase - 0.5| * 2` on the normalized `[0, 1]` phase.
pub fn fullness(phase01: f32) -> f32 {
    1.0 - (phase01 - 0.5).abs() * 2.0
}

/// Terminator position along local x: 1 at the far limb, -1 at the near limb.
pub fn terminator_threshold(phase01: f32) -> f32 {
    lerp(1.0, -1.0, fullness(phase01))
}

/// Soft 0..1 mask of the lit side.
pub fn lit_mask(phase01: f32, edge: f32, normal_x: f32, facing: f32) -> f32 {
    let threshold = terminator_threshold(phase01);
    smoothstep(threshold, threshold + edge, normal_x * facing)
}

/// Shade one surface point. Output is clamped to `[0, 1]`.
pub fn shade(
    params: &ShadingParams,
    phase01: f32,
    light_dir: Vec3,
    tint: Vec3,
    facing: f32,
    point: &SurfacePoint,
) -> Vec3 {
    let n = normalize(point.normal);
    let l = normalize(light_dir);
    let v = normalize(point.view_dir);

    let lit = lit_mask(saturate(phase01), params.edge, n[0], facing);

    let n_dot_l = dot(n, l);
    let diffuse = n_dot_l.max(0.0) * params.diffuse;
    let specular = if n_dot_l > 0.0 {
        let h = normalize(add(l, v));
        dot(n, h).max(0.0).powf(params.shininess) * params.specular
    } else {
        0.0
    };

    let light = lerp(params.earthshine, params.earthshine + diffuse, lit);
    let highlight = specular * lit;

    let color = if params.tint_and_rim {
        let rim = (1.0 - dot(n, v).max(0.0)).powf(params.rim_power) * params.rim_strength;
        let lit_albedo = mul(scale(point.albedo, light), tint);
        add(
            add(lit_albedo, [highlight; 3]),
            scale(params.rim_color, rim),
        )
    } else {
        add(scale(point.albedo, light), [highlight; 3])
    };
    saturate3(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Vec3 = [0.6, 0.6, 0.6];
    const WHITE: Vec3 = [1.0, 1.0, 1.0];

    fn point(normal: Vec3) -> SurfacePoint {
        SurfacePoint {
            normal,
            view_dir: [0.0, 0.0, 1.0],
            albedo: GRAY,
        }
    }

    #[test]
    fn fullness_peaks_mid_cycle() {
        assert!((fullness(0.5) - 1.0).abs() < 1e-6);
        assert!(fullness(0.0).abs() < 1e-6);
        assert!(fullness(1.0).abs() < 1e-6);
        assert!((fullness(0.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn threshold_sweeps_limb_to_limb() {
        assert!((terminator_threshold(0.0) - 1.0).abs() < 1e-6);
        assert!((terminator_threshold(0.5) + 1.0).abs() < 1e-6);
        assert!(terminator_threshold(0.25).abs() < 1e-6);
    }

    #[test]
    fn lit_mask_is_monotonic_in_normal_x() {
        for phase in [0.0, 0.1, 0.3, 0.5, 0.7, 0.95] {
            for facing in [-1.0, 1.0] {
                let mut prev = -1.0;
                for step in 0..=200 {
                    let nx = -1.0 + step as f32 * 0.01;
                    let m = lit_mask(phase, 0.018, nx * facing, facing);
                    assert!(m >= prev - 1e-6, "phase {phase} nx {nx}");
                    assert!((0.0..=1.0).contains(&m));
                    prev = m;
                }
            }
        }
    }

    #[test]
    fn facing_mirrors_terminator() {
        let a = lit_mask(0.3, 0.018, 0.4, 1.0);
        let b = lit_mask(0.3, 0.018, -0.4, -1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn new_moon_is_earthshine_only() {
        let params = ShadingParams::default();
        // Normal pointing away from the light so diffuse is zero too.
        let c = shade(&params, 0.0, [1.0, 0.0, 0.0], WHITE, 1.0, &point([-0.6, 0.0, 0.8]));
        let rim = (1.0f32 - 0.8).powf(params.rim_power) * params.rim_strength;
        for (ch, rim_ch) in c.iter().zip(params.rim_color) {
            let expected = GRAY[0] * params.earthshine + rim_ch * rim;
            assert!((ch - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn unlit_side_never_brighter_than_lit() {
        let params = ShadingParams {
            tint_and_rim: false,
            ..ShadingParams::default()
        };
        let light = normalize([0.9, 0.15, 0.6]);
        // Quarter phase: terminator at x = 0.
        let dark = shade(&params, 0.25, light, WHITE, 1.0, &point(normalize([-0.5, 0.0, 0.86])));
        let lit = shade(&params, 0.25, light, WHITE, 1.0, &point(normalize([0.5, 0.0, 0.86])));
        assert!(lit[0] > dark[0]);
        assert!((dark[0] - GRAY[0] * params.earthshine).abs() < 1e-4);
    }

    #[test]
    fn no_specular_when_facing_away_from_light() {
        let params = ShadingParams {
            tint_and_rim: false,
            earthshine: 0.0,
            ..ShadingParams::default()
        };
        // Full moon so the mask is 1 everywhere, light behind the surface.
        let c = shade(&params, 0.5, [0.0, 0.0, -1.0], WHITE, 1.0, &point([0.0, 0.0, 1.0]));
        assert_eq!(c, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn output_is_clamped() {
        let params = ShadingParams {
            diffuse: 5.0,
            specular: 5.0,
            ..ShadingParams::default()
        };
        let c = shade(&params, 0.5, [0.0, 0.0, 1.0], WHITE, 1.0, &point([0.0, 0.0, 1.0]));
        assert!(c.iter().all(|ch| (0.0..=1.0).contains(ch)));
        assert_eq!(c, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn tint_scales_albedo() {
        let params = ShadingParams::default();
        let light = [0.0, 0.0, 1.0];
        let p = SurfacePoint {
            normal: [0.0, 0.0, 1.0],
            view_dir: [0.0, 0.0, 1.0],
            albedo: [0.4, 0.4, 0.4],
        };
        let white = shade(&params, 0.5, light, WHITE, 1.0, &p);
        let blue = shade(&params, 0.5, light, [0.5, 0.5, 1.0], 1.0, &p);
        assert!(blue[0] < white[0]);
        assert!((blue[2] - white[2]).abs() < 1e-6);
    }
}
