//! Configuration schema types for huesphere.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the demo's built-in values.

mod camera;
mod logging;
mod render;
mod scene;
mod window;

pub use camera::*;
pub use logging::*;
pub use render::*;
pub use scene::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for huesphere.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HuesphereConfig {
    pub window: WindowConfig,
    pub sphere: SphereConfig,
    pub texture: TextureConfig,
    pub camera: CameraConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}
