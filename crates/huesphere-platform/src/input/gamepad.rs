//! Gamepad source for the exit buttons.

use gilrs::{Button, EventType, Gilrs};

use super::snapshot::ExitButton;
use super::state::ExitInputState;

/// Gamepad button that maps to an exit button, if any.
///
/// The pad's back/select button is the platform back button.
pub fn exit_button_for(button: Button) -> Option<ExitButton> {
    match button {
        Button::Select => Some(ExitButton::Back),
        _ => None,
    }
}

/// Drains gamepad events into an [`ExitInputState`] once per tick.
pub struct GamepadInput {
    gilrs: Option<Gilrs>,
}

impl GamepadInput {
    /// Open the gamepad backend. Failure leaves gamepads disabled.
    pub fn new() -> Self {
        match Gilrs::new() {
            Ok(gilrs) => Self { gilrs: Some(gilrs) },
            Err(e) => {
                tracing::warn!("Gamepad input unavailable: {e}");
                Self { gilrs: None }
            }
        }
    }

    /// Apply every pending gamepad event to `state`.
    pub fn poll(&mut self, state: &mut ExitInputState) {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return;
        };
        while let Some(event) = gilrs.next_event() {
            if let Some((button, pressed)) = button_change(&event.event) {
                state.handle_button(button, pressed);
            }
        }
    }
}

impl Default for GamepadInput {
    fn default() -> Self {
        Self::new()
    }
}

fn button_change(event: &EventType) -> Option<(ExitButton, bool)> {
    match *event {
        EventType::ButtonPressed(button, _) => exit_button_for(button).map(|b| (b, true)),
        EventType::ButtonReleased(button, _) => exit_button_for(button).map(|b| (b, false)),
        _ => None,
    }
}
