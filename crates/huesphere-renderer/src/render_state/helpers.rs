use huesphere_common::Color;
use huesphere_config::schema::CameraConfig;
use huesphere_procgen::{CameraParams, FrameTransforms};

use crate::gpu::PhysicalSize;
use crate::scene::{Material, SceneUniforms};

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Build the fixed camera from the `[camera]` config section.
pub fn camera_params(config: &CameraConfig) -> CameraParams {
    CameraParams {
        eye: config.eye,
        target: config.target,
        up: config.up,
        fov_y: config.fov_y_radians(),
        near: config.near,
        far: config.far,
    }
}

/// Uniforms for one frame drawn into a viewport of `size`.
///
/// The projection aspect always follows the current surface size.
pub(crate) fn frame_uniforms(
    camera: &CameraParams,
    material: &Material,
    size: PhysicalSize,
) -> SceneUniforms {
    let transforms = FrameTransforms::fixed(camera, size.width, size.height);
    SceneUniforms::new(&transforms, material)
}

/// Parse a `#rrggbb` clear color for a surface of the given encoding.
///
/// wgpu clear values are linear; on an sRGB surface the configured
/// sRGB bytes are decoded first so the cleared pixels match the hex value.
/// Unparseable strings clear to black.
pub fn clear_color_from_hex(hex: &str, srgb_surface: bool) -> wgpu::Color {
    let color = Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!(value = hex, "invalid clear color, using black");
        Color::BLACK
    });
    let [r, g, b, a] = color.to_unit_rgba();
    if srgb_surface {
        wgpu::Color {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
            a,
        }
    } else {
        wgpu::Color { r, g, b, a }
    }
}

/// sRGB → linear conversion for wgpu clear color on sRGB surfaces.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
