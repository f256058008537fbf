//! 4×4 matrix math for view, projection, and per-instance model transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. World space is
//! y-down (screen convention), so projections flip y into clip space.
//! Clip depth is wgpu's `[0, 1]`.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Vertical field of view of the scene camera (60°).
pub const SCENE_FOV_Y: f32 = std::f32::consts::FRAC_PI_3;

/// Perspective projection for a y-down world, depth mapped to `[0, 1]`.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective_y_down(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        -f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        far * near * range_inv,
        0.0,
    ]
}

/// Default scene projection for a viewport: 60° vertical fov with the
/// eye distance that makes one world unit one pixel at z = 0, near and
/// far at a tenth and ten times that distance.
pub fn scene_perspective(width: f32, height: f32) -> Mat4 {
    let height = height.max(1.0);
    let eye_z = (height * 0.5) / (SCENE_FOV_Y * 0.5).tan();
    perspective_y_down(SCENE_FOV_Y, width.max(1.0) / height, eye_z * 0.1, eye_z * 10.0)
}

/// Right-handed look-at view matrix.
pub fn look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4 {
    let z = normalize(sub(eye, target));
    let x = normalize(cross(up, z));
    let y = cross(z, x);

    [
        x[0],
        y[0],
        z[0],
        0.0,
        x[1],
        y[1],
        z[1],
        0.0,
        x[2],
        y[2],
        z[2],
        0.0,
        -dot(x, eye),
        -dot(y, eye),
        -dot(z, eye),
        1.0,
    ]
}

/// Rotation around the X axis.
pub fn rotate_x(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        1.0, 0.0, 0.0, 0.0, 0.0, c, s, 0.0, 0.0, -s, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Rotation around the Y axis.
pub fn rotate_y(angle: f32) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();
    [
        c, 0.0, -s, 0.0, 0.0, 1.0, 0.0, 0.0, s, 0.0, c, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
    ]
}

/// Uniform scale matrix.
pub fn scale(s: f32) -> Mat4 {
    [
        s, 0.0, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 0.0, 1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// `m × (x, y, z, 1)`, returning the homogeneous result.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, o) in out.iter_mut().enumerate() {
        *o = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normalize(a: [f32; 3]) -> [f32; 3] {
    let len = dot(a, a).sqrt();
    if len > 0.0 {
        [a[0] / len, a[1] / len, a[2] / len]
    } else {
        a
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_then_identity() {
        let t = translate(1.0, 2.0, 3.0);
        let result = mul(&t, &IDENTITY);
        assert!(approx_eq(&result, &t, 1e-6));
    }

    #[test]
    fn scale_then_translate_moves_point() {
        let m = mul(&translate(10.0, 0.0, -5.0), &scale(2.0));
        let p = transform_point(&m, [1.0, 1.0, 1.0]);
        assert_eq!(p, [12.0, 2.0, -3.0, 1.0]);
    }

    #[test]
    fn rotate_x_90_degrees() {
        let r = rotate_x(std::f32::consts::FRAC_PI_2);
        // Y axis maps to Z axis
        assert!((r[4] - 0.0).abs() < 1e-6);
        assert!((r[5] - 0.0).abs() < 1e-5);
        assert!((r[6] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_y_90_degrees() {
        let r = rotate_y(std::f32::consts::FRAC_PI_2);
        // X axis maps to -Z, Z axis maps to X
        assert!((r[0] - 0.0).abs() < 1e-5);
        assert!((r[2] - (-1.0)).abs() < 1e-5);
        assert!((r[8] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn look_at_from_positive_z_is_translation() {
        let v = look_at([0.0, 0.0, 980.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(approx_eq(&v, &translate(0.0, 0.0, -980.0), 1e-4));
    }

    #[test]
    fn look_at_places_target_on_negative_z_axis() {
        let v = look_at([140.0, -80.0, 980.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let p = transform_point(&v, [0.0, 0.0, 0.0]);
        let dist = (140.0f32 * 140.0 + 80.0 * 80.0 + 980.0 * 980.0).sqrt();
        assert!(p[0].abs() < 1e-3);
        assert!(p[1].abs() < 1e-3);
        assert!((p[2] + dist).abs() < 1e-2);
    }

    #[test]
    fn projection_flips_y_and_maps_depth_to_unit_range() {
        let p = perspective_y_down(SCENE_FOV_Y, 1.0, 10.0, 1000.0);
        // World +y (down on screen) ends in negative clip y.
        let below = transform_point(&p, [0.0, 5.0, -100.0]);
        assert!(below[1] / below[3] < 0.0);
        let near = transform_point(&p, [0.0, 0.0, -10.0]);
        let far = transform_point(&p, [0.0, 0.0, -1000.0]);
        assert!((near[2] / near[3]).abs() < 1e-5);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn scene_perspective_maps_pixels_at_origin_plane() {
        let (w, h) = (1600.0, 900.0);
        let view = look_at([0.0, 0.0, (h * 0.5) / (SCENE_FOV_Y * 0.5).tan()], [0.0; 3], [0.0, 1.0, 0.0]);
        let mvp = mul(&scene_perspective(w, h), &view);
        // Right edge of the canvas at z = 0 lands on the right clip edge.
        let edge = transform_point(&mvp, [w * 0.5, 0.0, 0.0]);
        assert!((edge[0] / edge[3] - 1.0).abs() < 1e-3);
        // Bottom edge (y down) lands on clip y = -1.
        let bottom = transform_point(&mvp, [0.0, h * 0.5, 0.0]);
        assert!((bottom[1] / bottom[3] + 1.0).abs() < 1e-3);
    }

    #[test]
    fn scene_perspective_survives_zero_extent() {
        let p = scene_perspective(0.0, 0.0);
        assert!(p.iter().all(|v| v.is_finite()));
    }
}
