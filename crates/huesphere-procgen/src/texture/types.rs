//! Texture sample and grid types.

/// RGB sample with every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantize to 8-bit RGBA with a fully opaque alpha.
    pub fn to_rgba8(self) -> [u8; 4] {
        [quantize(self.r), quantize(self.g), quantize(self.b), 255]
    }
}

fn quantize(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Fixed-size grid of RGB samples, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct HueTexture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl HueTexture {
    /// Sample at column `x`, row `y`. `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Tightly packed RGBA8 bytes (`4 * width * height`), ready for upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba8()).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
