//! Frame timing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: usize = 32;

/// Rolling average of frame intervals, reported in the window title.
pub struct FrameTimer {
    intervals: VecDeque<Duration>,
    last: Option<Instant>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            intervals: VecDeque::with_capacity(WINDOW),
            last: None,
        }
    }

    /// Mark the start of a frame. The first call only sets the reference point.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last.replace(now) {
            self.record(now - last);
        }
    }

    pub(crate) fn record(&mut self, interval: Duration) {
        if self.intervals.len() == WINDOW {
            self.intervals.pop_front();
        }
        self.intervals.push_back(interval);
    }

    /// Average frames per second, 0 until two frames have begun.
    pub fn fps(&self) -> f64 {
        let total: Duration = self.intervals.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.intervals.len() as f64 / total.as_secs_f64()
    }

    pub fn sample_count(&self) -> usize {
        self.intervals.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
