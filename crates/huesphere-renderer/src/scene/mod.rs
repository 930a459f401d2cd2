//! Textured sphere rendering: GPU-side scene resources, material uniforms,
//! and the unlit wgpu pipeline.

mod pipeline;
mod resources;
mod uniforms;

pub use pipeline::*;
pub use resources::*;
pub use uniforms::*;
