mod frame;
mod helpers;
mod state;

pub use helpers::{camera_params, clear_color_from_hex};
pub use state::RenderState;
