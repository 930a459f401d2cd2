//! wgpu host for the huesphere scene.
//!
//! Uploads the procedurally generated sphere and hue texture once, then
//! draws them every frame with a fixed camera and an unlit, texture-only
//! material.

pub mod gpu;
pub mod perf;
pub mod render_state;
pub mod scene;

pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use perf::FrameTimer;
pub use render_state::RenderState;
pub use scene::{Material, SceneResources, SceneUniforms, TexturedPipeline};
