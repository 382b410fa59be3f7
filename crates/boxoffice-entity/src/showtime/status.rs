//! Showtime status enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a showtime.
///
/// `Scheduled` is the only state open for sale. `Canceled` and
/// `Completed` are terminal; a canceled showtime is only "revived" by
/// scheduling a new one. `Completed` is time-driven and set by an
/// external process, never by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowtimeStatus {
    /// Upcoming and open for sale.
    Scheduled,
    /// Withdrawn; its auditorium window no longer blocks others.
    Canceled,
    /// Played out.
    Completed,
}

impl ShowtimeStatus {
    /// Check if the showtime is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Canceled | Self::Completed)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ShowtimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
