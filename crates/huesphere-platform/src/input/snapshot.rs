/// Buttons that end the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitButton {
    /// Gamepad back or platform back button.
    Back,
    /// Keyboard escape.
    Escape,
}

impl ExitButton {
    /// Map a normalized key name to an exit button.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Back" => Some(ExitButton::Back),
            "Escape" => Some(ExitButton::Escape),
            _ => None,
        }
    }
}

/// Input state sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub back_pressed: bool,
    pub escape_pressed: bool,
}

impl InputSnapshot {
    /// True when either back or escape was pressed this tick.
    pub fn wants_exit(&self) -> bool {
        self.back_pressed || self.escape_pressed
    }
}
