use super::snapshot::{ExitButton, InputSnapshot};

/// Tracks the exit buttons between two ticks.
///
/// Fed from window key events and gamepad events. A button counts for a
/// tick if it is held when the tick samples, or if it was pressed at any
/// point since the previous sample, so a press released before the tick
/// still reaches it.
#[derive(Debug, Default)]
pub struct ExitInputState {
    back_down: bool,
    escape_down: bool,
    back_latched: bool,
    escape_latched: bool,
}

impl ExitInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release. `key` is a normalized key name.
    ///
    /// Returns `true` when the key is one of the exit buttons.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        let Some(button) = ExitButton::from_key_name(key) else {
            return false;
        };
        self.handle_button(button, pressed);
        true
    }

    /// Record a press or release of an exit button from any source.
    pub fn handle_button(&mut self, button: ExitButton, pressed: bool) {
        let (down, latched) = match button {
            ExitButton::Back => (&mut self.back_down, &mut self.back_latched),
            ExitButton::Escape => (&mut self.escape_down, &mut self.escape_latched),
        };
        *down = pressed;
        if pressed {
            *latched = true;
        }
        tracing::debug!(?button, pressed, "exit button state changed");
    }

    /// Release held buttons, e.g. when the window loses focus.
    ///
    /// Presses already latched for the next tick are kept.
    pub fn clear(&mut self) {
        self.back_down = false;
        self.escape_down = false;
    }

    /// Sample this tick and consume the latched presses.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snap = InputSnapshot {
            back_pressed: self.back_down || self.back_latched,
            escape_pressed: self.escape_down || self.escape_latched,
        };
        self.back_latched = false;
        self.escape_latched = false;
        snap
    }
}
