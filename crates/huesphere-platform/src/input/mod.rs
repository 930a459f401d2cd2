//! Per-tick input polling.
//!
//! Window and gamepad events update an [`ExitInputState`]; once per frame
//! the host takes an [`InputSnapshot`] and checks
//! [`InputSnapshot::wants_exit`].

#[cfg(feature = "gamepad")]
mod gamepad;
mod snapshot;
mod state;

#[cfg(feature = "gamepad")]
pub use gamepad::{exit_button_for, GamepadInput};
pub use snapshot::{ExitButton, InputSnapshot};
pub use state::ExitInputState;
