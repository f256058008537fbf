//! Sphere mesh generation.
//!
//! UV sphere with position, normal, and texture coordinates. `v` runs
//! from the top pole (y = -1 in the y-down world) to the bottom pole,
//! `u` wraps once around y starting at +z.

use super::types::{SphereLod, SphereVertex};

/// Generate a unit UV sphere mesh.
///
/// `n_lat` = number of latitude bands (rows), `n_lon` = number of longitude
/// segments (columns). Each quad is split into 2 triangles, producing
/// `n_lat * n_lon * 6` vertices (no index buffer, simple triangle list).
pub fn generate_sphere_mesh(n_lat: u32, n_lon: u32) -> Vec<SphereVertex> {
    let n_lat = n_lat.max(2);
    let n_lon = n_lon.max(3);

    let mut vertices = Vec::with_capacity((n_lat * n_lon * 6) as usize);

    for lat in 0..n_lat {
        for lon in 0..n_lon {
            let v00 = sphere_vertex(lat, lon, n_lat, n_lon);
            let v10 = sphere_vertex(lat + 1, lon, n_lat, n_lon);
            let v01 = sphere_vertex(lat, lon + 1, n_lat, n_lon);
            let v11 = sphere_vertex(lat + 1, lon + 1, n_lat, n_lon);

            vertices.extend_from_slice(&[v00, v10, v01, v10, v11, v01]);
        }
    }

    vertices
}

/// Generate a sphere mesh from a tessellation preset.
pub fn generate_sphere_mesh_lod(lod: SphereLod) -> Vec<SphereVertex> {
    generate_sphere_mesh(lod.latitudes, lod.longitudes)
}

/// Vertex on the unit sphere for grid indices. The seam column
/// (`lon == n_lon`) repeats the first one with `u = 1`.
fn sphere_vertex(lat: u32, lon: u32, n_lat: u32, n_lon: u32) -> SphereVertex {
    let u = lon as f32 / n_lon as f32;
    let v = lat as f32 / n_lat as f32;

    let phi = std::f32::consts::PI * v - std::f32::consts::FRAC_PI_2;
    let theta = std::f32::consts::TAU * u;

    let position = [phi.cos() * theta.sin(), phi.sin(), phi.cos() * theta.cos()];

    SphereVertex {
        position,
        // unit sphere: normal == position
        normal: position,
        uv: [u, v],
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_mesh_vertex_count() {
        let mesh = generate_sphere_mesh(4, 8);
        // 4 lat bands × 8 lon segments × 6 vertices per quad = 192
        assert_eq!(mesh.len(), 192);
    }

    #[test]
    fn sphere_mesh_first_vertex_is_top_pole() {
        let mesh = generate_sphere_mesh(4, 8);
        let v = &mesh[0];
        assert!(v.position[0].abs() < 1e-6);
        assert!((v.position[1] - (-1.0)).abs() < 1e-6);
        assert!(v.position[2].abs() < 1e-6);
        assert_eq!(v.uv, [0.0, 0.0]);
    }

    #[test]
    fn sphere_mesh_is_unit_with_matching_normals() {
        let mesh = generate_sphere_mesh(12, 12);
        for v in &mesh {
            let len = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
            assert_eq!(v.position, v.normal);
        }
    }

    #[test]
    fn sphere_mesh_uv_in_unit_square() {
        let mesh = generate_sphere_mesh_lod(SphereLod::STAR);
        for v in &mesh {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
    }

    #[test]
    fn sphere_mesh_lod_moon() {
        let mesh = generate_sphere_mesh_lod(SphereLod::MOON);
        assert_eq!(mesh.len(), (72 * 72 * 6) as usize);
    }

    #[test]
    fn sphere_mesh_lod_star() {
        let mesh = generate_sphere_mesh_lod(SphereLod::STAR);
        assert_eq!(mesh.len(), (6 * 6 * 6) as usize);
    }

    #[test]
    fn sphere_mesh_minimum_clamp() {
        let mesh = generate_sphere_mesh(1, 1);
        assert_eq!(mesh.len(), (2 * 3 * 6) as usize);
    }

    #[test]
    fn sphere_vertex_bottom_pole() {
        let v = super::sphere_vertex(4, 0, 4, 8);
        assert!(v.position[0].abs() < 1e-5);
        assert!((v.position[1] - 1.0).abs() < 1e-5);
        assert!(v.position[2].abs() < 1e-5);
        assert_eq!(v.uv, [0.0, 1.0]);
    }

    #[test]
    fn sphere_vertex_equator_front_faces_viewer() {
        // u = 0 at the equator points toward +z
        let v = super::sphere_vertex(2, 0, 4, 8);
        assert!((v.position[2] - 1.0).abs() < 1e-5);
    }
}
