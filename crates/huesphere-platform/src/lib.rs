pub mod input;
pub mod winit_keys;

#[cfg(feature = "gamepad")]
pub use input::{exit_button_for, GamepadInput};
pub use input::{ExitButton, ExitInputState, InputSnapshot};
pub use winit_keys::normalize_winit_key;
