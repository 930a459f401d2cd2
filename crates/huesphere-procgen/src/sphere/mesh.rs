//! Sphere mesh generation.
//!
//! Latitude/longitude tessellation of the unit sphere into an indexed
//! triangle list. The grid keeps a duplicated seam column (`j = 0` and
//! `j = N`) and a full row of vertices at each pole so every vertex can
//! carry its own texture coordinate.

use huesphere_common::GenerateError;

use super::types::{MeshVertex, SphereMesh};

/// Generate a unit sphere with `tessellation` latitude bands and longitude
/// segments.
///
/// Produces `(N+1)²` vertices and `6·N²` indices. Each grid cell becomes two
/// triangles wound `(i,j)-(i+1,j)-(i,j+1)` and `(i,j+1)-(i+1,j)-(i+1,j+1)`,
/// which is counter-clockwise when seen from outside the sphere.
pub fn generate_sphere_mesh(tessellation: u32) -> Result<SphereMesh, GenerateError> {
    check_tessellation(tessellation)?;

    let n = tessellation;
    let stride = n + 1;

    let mut vertices = Vec::with_capacity(stride as usize * stride as usize);
    for i in 0..=n {
        for j in 0..=n {
            let d = sphere_point(i, j, n);
            vertices.push(MeshVertex {
                position: d,
                normal: d, // unit sphere: normal == position
                uv: [j as f32 / n as f32, i as f32 / n as f32],
            });
        }
    }

    let mut indices = Vec::with_capacity(6 * (n as usize) * (n as usize));
    for i in 0..n {
        for j in 0..n {
            let top_left = i * stride + j;
            let bottom_left = (i + 1) * stride + j;
            let top_right = top_left + 1;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }

    tracing::debug!(
        tessellation = n,
        vertices = vertices.len(),
        indices = indices.len(),
        "generated sphere mesh"
    );

    Ok(SphereMesh {
        tessellation: n,
        vertices,
        indices,
    })
}

/// Reject `N = 0`, and any `N` whose `6·N²` indices would not fit a `u32`
/// draw count. `(N+1)² < 6·N²` for `N ≥ 1`, so vertex indices fit too.
fn check_tessellation(tessellation: u32) -> Result<(), GenerateError> {
    if tessellation == 0 {
        return Err(GenerateError::InvalidTessellation(tessellation));
    }
    let n = u64::from(tessellation);
    let fits = n
        .checked_mul(n)
        .and_then(|sq| sq.checked_mul(6))
        .is_some_and(|count| count <= u64::from(u32::MAX));
    if fits {
        Ok(())
    } else {
        Err(GenerateError::TessellationTooLarge(tessellation))
    }
}

/// Direction on the unit sphere for grid cell `(lat, lon)`.
///
/// Polar angle is measured from +Y; azimuth starts at +Z and turns toward +X.
fn sphere_point(lat: u32, lon: u32, n: u32) -> [f32; 3] {
    let theta = lat as f32 * std::f32::consts::PI / n as f32;
    let phi = lon as f32 * 2.0 * std::f32::consts::PI / n as f32;

    let sin_theta = theta.sin();
    let cos_theta = theta.cos();

    [phi.sin() * sin_theta, cos_theta, phi.cos() * sin_theta]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn zero_tessellation_is_rejected() {
        assert_eq!(
            generate_sphere_mesh(0),
            Err(GenerateError::InvalidTessellation(0))
        );
    }

    #[test]
    fn oversized_tessellation_is_rejected() {
        assert_eq!(
            generate_sphere_mesh(u32::MAX),
            Err(GenerateError::TessellationTooLarge(u32::MAX))
        );
        assert_eq!(
            generate_sphere_mesh(65_535),
            Err(GenerateError::TessellationTooLarge(65_535))
        );
        assert_eq!(
            generate_sphere_mesh(26_755),
            Err(GenerateError::TessellationTooLarge(26_755))
        );
    }

    #[test]
    fn largest_tessellation_keeps_index_count_in_u32() {
        // 6 · 26754² = 4_294_659_096 <= u32::MAX; one more overflows.
        assert_eq!(check_tessellation(26_754), Ok(()));
        assert!(check_tessellation(26_755).is_err());
        assert!(check_tessellation(u32::MAX).is_err());
    }

    #[test]
    fn counts_follow_tessellation() {
        for n in 1..=12u32 {
            let mesh = generate_sphere_mesh(n).unwrap();
            let side = (n + 1) as usize;
            assert_eq!(mesh.vertex_count(), side * side, "n = {n}");
            assert_eq!(mesh.index_count(), 6 * (n * n) as usize, "n = {n}");
            assert_eq!(mesh.index_count() % 3, 0);
            assert!(mesh
                .indices
                .iter()
                .all(|&idx| (idx as usize) < mesh.vertex_count()));
        }
    }

    #[test]
    fn tessellation_16_scenario() {
        let mesh = generate_sphere_mesh(16).unwrap();
        assert_eq!(mesh.vertex_count(), 289);
        assert_eq!(mesh.index_count(), 1536);
        assert_eq!(mesh.triangle_count(), 512);
    }

    #[test]
    fn tessellation_1_is_minimal_mesh() {
        let mesh = generate_sphere_mesh(1).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 2, 1, 1, 2, 3]);
        assert!(close(mesh.vertices[0].position, [0.0, 1.0, 0.0]));
        assert!(close(mesh.vertices[3].position, [0.0, -1.0, 0.0]));
    }

    #[test]
    fn positions_equal_normals_and_are_unit_length() {
        let mesh = generate_sphere_mesh(24).unwrap();
        for (i, v) in mesh.vertices.iter().enumerate() {
            assert_eq!(v.position, v.normal, "vertex {i}");
            let len = length(v.position);
            assert!((len - 1.0).abs() < EPS, "vertex {i}: |p| = {len}");
        }
    }

    #[test]
    fn pole_rows_collapse_to_a_single_point() {
        let n = 10;
        let mesh = generate_sphere_mesh(n).unwrap();
        let stride = (n + 1) as usize;
        let north = &mesh.vertices[..stride];
        let south = &mesh.vertices[stride * n as usize..];

        for v in north {
            assert!(close(v.position, [0.0, 1.0, 0.0]));
        }
        for v in south {
            assert!(close(v.position, south[0].position));
            assert!(close(v.position, [0.0, -1.0, 0.0]));
        }
        // Pole vertices still differ in texture coordinate.
        assert!((north[0].uv[0] - north[stride - 1].uv[0]).abs() > 0.5);
    }

    #[test]
    fn seam_columns_share_positions_but_not_uvs() {
        let n = 8;
        let mesh = generate_sphere_mesh(n).unwrap();
        let stride = (n + 1) as usize;
        for i in 0..stride {
            let first = mesh.vertices[i * stride];
            let last = mesh.vertices[i * stride + n as usize];
            assert!(close(first.position, last.position), "row {i}");
            assert_eq!(first.uv[0], 0.0);
            assert_eq!(last.uv[0], 1.0);
            assert_eq!(first.uv[1], last.uv[1]);
        }
    }

    #[test]
    fn texcoords_stay_in_unit_range() {
        let mesh = generate_sphere_mesh(7).unwrap();
        for v in &mesh.vertices {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
    }

    #[test]
    fn winding_faces_outward() {
        let mesh = generate_sphere_mesh(12).unwrap();
        for [a, b, c] in mesh.triangles() {
            let pa = mesh.vertices[a as usize].position;
            let pb = mesh.vertices[b as usize].position;
            let pc = mesh.vertices[c as usize].position;
            let e1 = [pb[0] - pa[0], pb[1] - pa[1], pb[2] - pa[2]];
            let e2 = [pc[0] - pa[0], pc[1] - pa[1], pc[2] - pa[2]];
            let n = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            // Triangles touching a pole have one zero-length edge.
            if length(n) < 1e-6 {
                continue;
            }
            let centroid = [
                pa[0] + pb[0] + pc[0],
                pa[1] + pb[1] + pc[1],
                pa[2] + pb[2] + pc[2],
            ];
            let facing = n[0] * centroid[0] + n[1] * centroid[1] + n[2] * centroid[2];
            assert!(facing > 0.0, "triangle [{a}, {b}, {c}] faces inward");
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_sphere_mesh(20).unwrap();
        let b = generate_sphere_mesh(20).unwrap();
        let a_bytes: &[u8] = bytemuck::cast_slice(&a.vertices);
        let b_bytes: &[u8] = bytemuck::cast_slice(&b.vertices);
        assert_eq!(a_bytes, b_bytes);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn sphere_point_equator_front() {
        // lat = N/2, lon = 0 → (0, 0, 1)
        let p = super::sphere_point(2, 0, 4);
        assert!(close(p, [0.0, 0.0, 1.0]));
        // lat = N/2, lon = N/4 → (1, 0, 0)
        let p = super::sphere_point(2, 1, 4);
        assert!(close(p, [1.0, 0.0, 0.0]));
    }
}
