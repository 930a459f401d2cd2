//! Per-frame tick: poll exit buttons, then draw.

use std::time::Duration;

use super::core::HuesphereApp;

/// Interval between FPS log lines when `render.log_fps` is on.
const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(2);

impl HuesphereApp {
    /// Returns `true` when the exit buttons request shutdown this tick.
    ///
    /// Presses since the previous tick count even if already released.
    pub(super) fn poll_exit(&mut self) -> bool {
        #[cfg(feature = "gamepad")]
        self.gamepad.poll(&mut self.input);

        let snapshot = self.input.snapshot();
        if snapshot.wants_exit() {
            tracing::info!(
                back = snapshot.back_pressed,
                escape = snapshot.escape_pressed,
                "Exit requested"
            );
            self.should_exit = true;
        }
        self.should_exit
    }

    /// Render a single frame of the static scene.
    pub(super) fn render_frame(&mut self) {
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        self.frame_timer.begin_frame();
        if let Err(e) = rs.render_frame() {
            tracing::error!("Render error: {e}");
        }

        if self.config.render.log_fps && self.frame_timer.report_due(FPS_REPORT_INTERVAL) {
            tracing::debug!(
                fps = format!("{:.1}", self.frame_timer.fps()),
                frame_ms = format!("{:.2}", self.frame_timer.frame_time_ms()),
                "frame timing"
            );
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
