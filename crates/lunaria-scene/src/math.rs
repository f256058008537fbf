//! Scalar and `[f32; 3]` helpers with shader-style semantics.

/// Three-component vector, matching the `[f32; 3]` layout uploaded to the GPU.
pub type Vec3 = [f32; 3];

/// Linear interpolation `a + (b - a) * t` (GLSL `mix`).
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise [`lerp`].
pub fn lerp3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

/// Re-map `value` from `[in_min, in_max]` to `[out_min, out_max]` without clamping.
///
/// A degenerate input range maps to the middle of the output range.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return (out_min + out_max) * 0.5;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// Clamp into `[0, 1]`.
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Hermite smoothstep. Equal edges degrade to a hard step at `edge0`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 == edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = saturate((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn mul(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] * b[0], a[1] * b[1], a[2] * b[2]]
}

pub fn length(a: Vec3) -> f32 {
    dot(a, a).sqrt()
}

/// Unit vector along `a`. A zero vector is divided by 1 and comes back unchanged.
pub fn normalize(a: Vec3) -> Vec3 {
    let m = length(a);
    let m = if m > 0.0 { m } else { 1.0 };
    [a[0] / m, a[1] / m, a[2] / m]
}

/// Clamp every channel into `[0, 1]`.
pub fn saturate3(a: Vec3) -> Vec3 {
    [saturate(a[0]), saturate(a[1]), saturate(a[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(-340.0, -60.0, 0.0), -340.0);
        assert_eq!(lerp(-340.0, -60.0, 1.0), -60.0);
        assert!((lerp(0.78, 1.55, 0.5) - 1.165).abs() < 1e-6);
    }

    #[test]
    fn map_range_linear() {
        assert!((map_range(400.0, 0.0, 800.0, -1.0, 1.0) - 0.0).abs() < 1e-6);
        assert!((map_range(0.0, 0.0, 800.0, 0.0, 30.0) - 0.0).abs() < 1e-6);
        assert!((map_range(800.0, 0.0, 800.0, 0.0, 30.0) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn map_range_degenerate_input_returns_midpoint() {
        assert_eq!(map_range(5.0, 0.0, 0.0, -1.0, 1.0), 0.0);
        assert_eq!(map_range(5.0, 3.0, 3.0, 0.0, 30.0), 15.0);
    }

    #[test]
    fn smoothstep_shape() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_equal_edges_is_a_step() {
        assert_eq!(smoothstep(0.2, 0.2, 0.1), 0.0);
        assert_eq!(smoothstep(0.2, 0.2, 0.2), 1.0);
    }

    #[test]
    fn normalize_unit_length() {
        let n = normalize([3.0, 0.0, 4.0]);
        assert!((length(n) - 1.0).abs() < 1e-6);
        assert!((n[0] - 0.6).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector_does_not_divide_by_zero() {
        let n = normalize([0.0, 0.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, 0.0]);
        assert!(n.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn saturate3_clamps_each_channel() {
        assert_eq!(saturate3([-0.5, 0.5, 1.5]), [0.0, 0.5, 1.0]);
    }
}
