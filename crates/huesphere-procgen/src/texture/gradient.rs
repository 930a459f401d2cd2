//! Horizontal hue gradient.
//!
//! Hue is the column position `x / width`, identical on every row. The
//! hue→RGB mapping is the closed-form triangle wave
//!
//! ```text
//! r = clamp(|6h - 3| - 1)
//! g = clamp(2 - |6h - 2|)
//! b = clamp(2 - |6h - 4|)
//! ```
//!
//! rather than the sector-based HSV conversion.

use huesphere_common::GenerateError;

use super::types::{HueTexture, Rgb};

/// Map a normalized hue in `[0, 1]` to a fully saturated RGB color.
pub fn hue_to_rgb(hue: f32) -> Rgb {
    let h6 = hue * 6.0;
    Rgb {
        r: saturate((h6 - 3.0).abs() - 1.0),
        g: saturate(2.0 - (h6 - 2.0).abs()),
        b: saturate(2.0 - (h6 - 4.0).abs()),
    }
}

/// Generate a `width × height` texture whose hue sweeps left to right.
pub fn generate_hue_texture(width: u32, height: u32) -> Result<HueTexture, GenerateError> {
    if width == 0 || height == 0 {
        return Err(GenerateError::InvalidTextureSize { width, height });
    }

    let row: Vec<Rgb> = (0..width)
        .map(|x| hue_to_rgb(x as f32 / width as f32))
        .collect();

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for _ in 0..height {
        pixels.extend_from_slice(&row);
    }

    tracing::debug!(width, height, "generated hue texture");

    Ok(HueTexture {
        width,
        height,
        pixels,
    })
}

fn saturate(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

// =============================================================================
// Tests
// =============================================================================
