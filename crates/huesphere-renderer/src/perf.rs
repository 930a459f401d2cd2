//! Frame timing for the optional FPS log.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling window of frame durations.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_report: Instant,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a timer with a 120-sample rolling window.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::new(),
            last_frame: now,
            last_report: now,
            max_samples: 120,
        }
    }

    /// Record the start of a new frame. Call this once per frame.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        (self.total_secs() / self.frame_times.len() as f64) * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// True at most once per `every`; resets the report clock when it fires.
    pub fn report_due(&mut self, every: Duration) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last_report) >= every {
            self.last_report = now;
            true
        } else {
            false
        }
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
