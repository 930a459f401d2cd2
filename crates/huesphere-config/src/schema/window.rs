//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    pub startup_mode: StartupMode,
    pub cursor_visible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Huesphere".into(),
            width: 1280,
            height: 800,
            startup_mode: StartupMode::Windowed,
            cursor_visible: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
