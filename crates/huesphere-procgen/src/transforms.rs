//! Per-frame world/view/projection for the static camera.

use crate::matrix::{self as mat, Mat4, Vec3};

/// Fixed camera placement and lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_y: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// The three matrices handed to the draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl FrameTransforms {
    /// World at the origin, view from `camera`, projection for the viewport.
    ///
    /// A zero-height viewport (minimized window) uses aspect 1.0. A
    /// degenerate camera basis falls back to an identity view; config
    /// validation rejects those cameras before they get here.
    pub fn fixed(camera: &CameraParams, viewport_width: u32, viewport_height: u32) -> Self {
        let aspect = aspect_ratio(viewport_width, viewport_height);
        Self {
            world: mat::translate(0.0, 0.0, 0.0),
            view: mat::look_at(camera.eye, camera.target, camera.up).unwrap_or(mat::IDENTITY),
            projection: mat::perspective(camera.fov_y, aspect, camera.near, camera.far),
        }
    }

    /// Combined `projection × view × world`.
    pub fn mvp(&self) -> Mat4 {
        mat::mul(&self.projection, &mat::mul(&self.view, &self.world))
    }
}

/// Viewport width / height, or 1.0 when the height is zero.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height > 0 {
        width as f32 / height as f32
    } else {
        1.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_matches_demo_view() {
        let cam = CameraParams::default();
        assert_eq!(cam.eye, [0.0, 0.0, 5.0]);
        assert_eq!(cam.target, [0.0, 0.0, 0.0]);
        assert_eq!(cam.up, [0.0, 1.0, 0.0]);
        assert!((cam.fov_y - std::f32::consts::FRAC_PI_4).abs() < f32::EPSILON);
        assert!((cam.near - 0.1).abs() < f32::EPSILON);
        assert!((cam.far - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn world_is_identity() {
        let t = FrameTransforms::fixed(&CameraParams::default(), 800, 600);
        assert_eq!(t.world, mat::IDENTITY);
    }

    #[test]
    fn projection_uses_viewport_aspect() {
        let cam = CameraParams::default();
        let wide = FrameTransforms::fixed(&cam, 1920, 1080);
        let square = FrameTransforms::fixed(&cam, 600, 600);
        assert!((square.projection[0] / wide.projection[0] - 1920.0 / 1080.0).abs() < 1e-4);
        assert!((square.projection[5] - wide.projection[5]).abs() < 1e-6);
    }

    #[test]
    fn zero_height_gives_aspect_one() {
        assert!((aspect_ratio(800, 0) - 1.0).abs() < f32::EPSILON);
        assert!((aspect_ratio(800, 400) - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn sphere_center_projects_to_screen_center() {
        let t = FrameTransforms::fixed(&CameraParams::default(), 1280, 720);
        let clip = mat::transform_point(&t.mvp(), [0.0, 0.0, 0.0]);
        let ndc = [clip[0] / clip[3], clip[1] / clip[3], clip[2] / clip[3]];
        assert!(ndc[0].abs() < 1e-6);
        assert!(ndc[1].abs() < 1e-6);
        assert!(ndc[2] > 0.0 && ndc[2] < 1.0);
    }

    #[test]
    fn unit_sphere_fits_in_view() {
        let t = FrameTransforms::fixed(&CameraParams::default(), 800, 800);
        let clip = mat::transform_point(&t.mvp(), [0.0, 1.0, 0.0]);
        let y = clip[1] / clip[3];
        // tan(22.5°) ≈ 0.414 at distance 5 → top of the sphere at ~0.48 NDC
        assert!(y > 0.4 && y < 0.6, "ndc y = {y}");
    }

    #[test]
    fn degenerate_camera_falls_back_to_identity_view() {
        let cam = CameraParams {
            eye: [0.0, 0.0, 0.0],
            ..CameraParams::default()
        };
        let t = FrameTransforms::fixed(&cam, 100, 100);
        assert_eq!(t.view, mat::IDENTITY);
    }
}
