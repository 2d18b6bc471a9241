//! Capture clock for session timing.
//!
//! Every screening session is anchored to a monotonic epoch recorded when
//! capture starts. Frame timestamps are nanoseconds relative to that epoch,
//! so warm-up and duration gating work identically for live capture and
//! replayed frame files.

use std::time::Instant;

/// A capture clock providing monotonic timestamps relative to a fixed epoch
/// (the moment capture started).
#[derive(Debug, Clone)]
pub struct CaptureClock {
    /// The instant capture started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl CaptureClock {
    /// Create a new capture clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Nanoseconds elapsed since capture start.
    pub fn elapsed_ns(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }

    /// Seconds elapsed since capture start.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at capture start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// Convert an elapsed nanosecond value to seconds.
    pub fn ns_to_secs(ns: u64) -> f64 {
        ns as f64 / 1_000_000_000.0
    }

    /// Convert seconds to nanoseconds.
    pub fn secs_to_ns(secs: f64) -> u64 {
        (secs * 1_000_000_000.0) as u64
    }
}
