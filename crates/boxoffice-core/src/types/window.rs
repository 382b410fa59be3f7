//! Half-open time windows `[start, end)` used for showtime scheduling.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A half-open time interval `[start, end)`.
///
/// Construction validates `start < end`; a degenerate window is an
/// `InvalidWindow` error, so any `TimeWindow` in circulation is well
/// formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive start instant.
    pub start: DateTime<Utc>,
    /// Exclusive end instant.
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window, rejecting `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::invalid_window(format!(
                "Window end {end} is not after start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Length of the window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether the given instant falls inside `[start, end)`.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}
