//! Showtime query filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::types::id::AuditoriumId;
use boxoffice_entity::showtime::{Showtime, ShowtimeStatus};

/// Criteria for listing showtimes. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowtimeFilter {
    /// Match only this lifecycle status.
    pub status: Option<ShowtimeStatus>,
    /// Match only showtimes in this auditorium.
    pub auditorium_id: Option<AuditoriumId>,
    /// Match only showtimes starting at or after this instant.
    pub starts_from: Option<DateTime<Utc>>,
    /// Match only showtimes starting before this instant.
    pub starts_before: Option<DateTime<Utc>>,
}

impl ShowtimeFilter {
    /// Whether a showtime satisfies every set criterion.
    pub fn matches(&self, showtime: &Showtime) -> bool {
        if let Some(status) = self.status {
            if showtime.status != status {
                return false;
            }
        }
        if let Some(auditorium_id) = self.auditorium_id {
            if showtime.auditorium_id != auditorium_id {
                return false;
            }
        }
        if let Some(from) = self.starts_from {
            if showtime.window.start < from {
                return false;
            }
        }
        if let Some(before) = self.starts_before {
            if showtime.window.start >= before {
                return false;
            }
        }
        true
    }
}
