//! Showtime scheduling configuration.

use serde::{Deserialize, Serialize};

/// Settings for auditorium scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Mandatory idle interval between two showtimes on the same
    /// auditorium, covering cleaning and changeover. Applied during
    /// conflict comparison only, never stored in the window.
    #[serde(default = "default_buffer_minutes")]
    pub turnaround_buffer_minutes: i64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            turnaround_buffer_minutes: default_buffer_minutes(),
        }
    }
}

fn default_buffer_minutes() -> i64 {
    30
}
