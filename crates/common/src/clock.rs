//! Session clock for the bounded capture window.
//!
//! A session is anchored to a monotonic epoch recorded when the first
//! frame is requested. The budget check is coarse-grained: it runs once
//! per loop iteration, so a slow frame can overshoot the budget by up to
//! one frame's processing time.

use std::time::{Duration, Instant};

/// Default session window duration.
pub const DEFAULT_SESSION_BUDGET: Duration = Duration::from_secs(5);

/// A monotonic clock anchored to the moment a session started.
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// The instant the session started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl SessionClock {
    /// Create a new session clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Get time elapsed since session start.
    pub fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Get seconds elapsed since session start.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Whether the given time budget has been spent.
    pub fn budget_expired(&self, budget: Duration) -> bool {
        self.epoch.elapsed() >= budget
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }
}
