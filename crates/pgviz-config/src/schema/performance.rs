//! Frame pacing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How often the cache is queried and redrawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Frames (and buffer cache queries) per second (valid range: 1-60).
    pub frame_rate: u32,
}

impl PerformanceConfig {
    /// Time between frames. A zero rate is treated as 1 fps.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { frame_rate: 5 }
    }
}
