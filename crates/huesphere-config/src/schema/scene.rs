//! Procedural scene parameters: sphere resolution and texture size.

use serde::{Deserialize, Serialize};

/// Sphere tessellation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Latitude bands and longitude segments (valid range: 1-1024).
    pub tessellation: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self { tessellation: 32 }
    }
}

/// Hue-gradient texture dimensions in texels (valid range: 1-8192).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
        }
    }
}
