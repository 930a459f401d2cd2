use std::sync::Arc;
use winit::window::Window;

use huesphere_config::HuesphereConfig;
use huesphere_procgen::{CameraParams, HueTexture, SphereMesh};

use crate::gpu::{GpuContext, RendererError};
use crate::scene::{DepthTarget, Material, SceneResources, TexturedPipeline};

use super::helpers::{camera_params, clear_color_from_hex};

// ---------------------------------------------------------------------------
// RenderState
// ---------------------------------------------------------------------------

/// Everything needed to draw the sphere each frame.
///
/// The mesh and texture are uploaded once here and never modified.
pub struct RenderState {
    pub gpu: GpuContext,
    pub pipeline: TexturedPipeline,
    pub scene: SceneResources,
    pub depth: DepthTarget,
    pub camera: CameraParams,
    pub material: Material,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create the GPU context, pipeline, and scene resources for a window.
    pub async fn new(
        window: Arc<Window>,
        config: &HuesphereConfig,
        mesh: &SphereMesh,
        texture: &HueTexture,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.render.vsync).await?;

        let pipeline = TexturedPipeline::new(&gpu.device, gpu.format());
        let scene = SceneResources::upload(
            &gpu.device,
            &gpu.queue,
            &pipeline.texture_bind_group_layout,
            gpu.format(),
            mesh,
            texture,
        )?;
        let depth = DepthTarget::new(&gpu.device, gpu.size.width, gpu.size.height);
        let clear_color = clear_color_from_hex(&config.render.clear_color, gpu.format().is_srgb());

        Ok(Self {
            gpu,
            pipeline,
            scene,
            depth,
            camera: camera_params(&config.camera),
            material: Material::UNLIT_TEXTURED,
            clear_color,
        })
    }

    /// Handle a window resize by reconfiguring the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth = DepthTarget::new(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }
}
