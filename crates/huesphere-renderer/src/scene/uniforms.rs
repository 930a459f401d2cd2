//! Per-frame uniform block for the textured sphere.

use huesphere_procgen::FrameTransforms;

/// Surface appearance of the sphere.
///
/// The sphere is always unlit and ignores vertex colors; only texture
/// sampling can be toggled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub texture_enabled: bool,
    /// Multiplied with the texture sample (RGBA, linear).
    pub diffuse: [f32; 4],
}

impl Material {
    /// Texture-only, white diffuse.
    pub const UNLIT_TEXTURED: Self = Self {
        texture_enabled: true,
        diffuse: [1.0, 1.0, 1.0, 1.0],
    };
}

impl Default for Material {
    fn default() -> Self {
        Self::UNLIT_TEXTURED
    }
}

/// GPU-side uniform buffer matching the WGSL `SceneUniforms` struct.
///
/// Layout: 3 × mat4 + vec4<f32> + vec4<u32> = 224 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub world: [f32; 16],
    pub view: [f32; 16],
    pub projection: [f32; 16],
    pub diffuse: [f32; 4],
    /// x = texture enabled (0/1); y, z, w unused.
    pub flags: [u32; 4],
}

impl SceneUniforms {
    pub fn new(transforms: &FrameTransforms, material: &Material) -> Self {
        Self {
            world: transforms.world,
            view: transforms.view,
            projection: transforms.projection,
            diffuse: material.diffuse,
            flags: [u32::from(material.texture_enabled), 0, 0, 0],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
