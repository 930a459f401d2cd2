//! 4×4 matrix math for world/view/projection transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Right-handed, with
//! a `[0, 1]` clip-space depth range as wgpu expects.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

/// Three-component vector.
pub type Vec3 = [f32; 3];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Right-handed perspective projection with depth mapped to `[0, 1]`.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0, `far > near`).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        near * far * range_inv,
        0.0,
    ]
}

/// Right-handed view matrix looking from `eye` toward `target`.
///
/// Returns `None` when `eye == target` or `up` is parallel to the view
/// direction, since no orthonormal basis exists.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Option<Mat4> {
    let z = normalize(sub(eye, target))?;
    let x = normalize(cross(up, z))?;
    let y = cross(z, x);

    Some([
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
    ])
}

/// Translation matrix.
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    [
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, z, 1.0,
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

/// Transform a point (w = 1) and return the homogeneous result.
pub fn transform_point(m: &Mat4, p: Vec3) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, slot) in out.iter_mut().enumerate() {
        *slot = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: Vec3) -> Option<Vec3> {
    let len = dot(v, v).sqrt();
    if len <= f32::EPSILON {
        return None;
    }
    Some([v[0] / len, v[1] / len, v[2] / len])
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
    fn translate_zero_is_identity() {
        assert!(approx_eq(&translate(0.0, 0.0, 0.0), &IDENTITY, 1e-6));
    }

    #[test]
    fn translate_moves_point() {
        let p = transform_point(&translate(1.0, 2.0, 3.0), [1.0, 1.0, 1.0]);
        assert_eq!(p, [2.0, 3.0, 4.0, 1.0]);
    }

    #[test]
    fn look_at_from_positive_z() {
        let v = look_at([0.0, 0.0, 5.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]).unwrap();
        // Origin ends up 5 units in front of the camera (-Z in view space)
        let origin = transform_point(&v, [0.0, 0.0, 0.0]);
        assert!((origin[0]).abs() < 1e-6);
        assert!((origin[1]).abs() < 1e-6);
        assert!((origin[2] - (-5.0)).abs() < 1e-6);
        // +X stays to the right, +Y stays up
        let right = transform_point(&v, [1.0, 0.0, 0.0]);
        assert!((right[0] - 1.0).abs() < 1e-6);
        let up = transform_point(&v, [0.0, 1.0, 0.0]);
        assert!((up[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn look_at_degenerate_inputs() {
        assert!(look_at([1.0, 2.0, 3.0], [1.0, 2.0, 3.0], [0.0, 1.0, 0.0]).is_none());
        assert!(look_at([0.0, 5.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]).is_none());
    }

    #[test]
    fn perspective_basic() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
        // p[11] should be -1 (perspective divide)
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn perspective_maps_clip_planes_to_unit_depth() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        let near = transform_point(&p, [0.0, 0.0, -0.1]);
        let far = transform_point(&p, [0.0, 0.0, -100.0]);
        assert!((near[2] / near[3]).abs() < 1e-5);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
    }
}
