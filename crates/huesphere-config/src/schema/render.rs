//! Frame rendering settings.

use serde::{Deserialize, Serialize};

/// Clear color, presentation, and frame statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Hex color the frame is cleared to before drawing.
    pub clear_color: String,
    /// Wait for vertical blank when presenting (Fifo) instead of Immediate/Mailbox.
    pub vsync: bool,
    /// Log average FPS every few seconds at debug level.
    pub log_fps: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: "#000000".into(),
            vsync: true,
            log_fps: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults() {
        let r = RenderConfig::default();
        assert_eq!(r.clear_color, "#000000");
        assert!(r.vsync);
        assert!(!r.log_fps);
    }
}
