//! Procedural hue-gradient texture synthesis.

mod gradient;
mod types;

pub use gradient::*;
pub use types::*;
