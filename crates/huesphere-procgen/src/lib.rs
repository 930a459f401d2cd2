//! Procedural scene data for huesphere.
//!
//! Pure, host-independent generators: a latitude/longitude unit sphere,
//! a horizontal hue-gradient texture, and the 4×4 matrix math used to
//! place the camera. Nothing here touches the GPU.

pub mod matrix;
pub mod sphere;
pub mod texture;
pub mod transforms;

pub use sphere::{generate_sphere_mesh, MeshVertex, SphereMesh};
pub use texture::{generate_hue_texture, hue_to_rgb, HueTexture, Rgb};
pub use transforms::{CameraParams, FrameTransforms};
