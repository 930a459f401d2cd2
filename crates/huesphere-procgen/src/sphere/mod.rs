//! Procedural unit-sphere tessellation.

mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
