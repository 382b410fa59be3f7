//! Showtime entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::traits::directory::ShowtimeSummary;
use boxoffice_core::types::id::{AuditoriumId, ShowtimeId};
use boxoffice_core::types::window::TimeWindow;

use super::format::ScreenFormat;
use super::status::ShowtimeStatus;

/// A scheduled screening in one auditorium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showtime {
    /// Unique showtime identifier, assigned by the schedule service.
    pub id: ShowtimeId,
    /// The auditorium the showtime plays in.
    pub auditorium_id: AuditoriumId,
    /// The screening window `[start, end)`. The turnaround buffer is
    /// *not* part of the window; it is applied during conflict checks.
    pub window: TimeWindow,
    /// Projection format. Must be supported by the auditorium.
    pub format: ScreenFormat,
    /// Base ticket price before seat-category multipliers.
    pub base_price: f64,
    /// Number of seats in this showtime's inventory.
    pub seats_total: u32,
    /// Per-showtime hold TTL override in seconds.
    pub hold_ttl_seconds: Option<u64>,
    /// Lifecycle status.
    pub status: ShowtimeStatus,
    /// When the showtime was scheduled.
    pub created_at: DateTime<Utc>,
}

impl Showtime {
    /// Whether the showtime is open for sale.
    pub fn is_scheduled(&self) -> bool {
        self.status == ShowtimeStatus::Scheduled
    }

    /// The summary handed to booking collaborators.
    pub fn summary(&self) -> ShowtimeSummary {
        ShowtimeSummary {
            showtime_id: self.id,
            auditorium_id: self.auditorium_id,
            window: self.window,
            base_price: self.base_price,
            is_scheduled: self.is_scheduled(),
            hold_ttl_seconds: self.hold_ttl_seconds,
        }
    }
}

/// Data required to schedule a new showtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowtimeDraft {
    /// Target auditorium.
    pub auditorium_id: AuditoriumId,
    /// Requested screening window.
    pub window: TimeWindow,
    /// Projection format.
    pub format: ScreenFormat,
    /// Base ticket price.
    pub base_price: f64,
    /// Requested seat count; defaults to the auditorium capacity.
    pub seats_total: Option<u32>,
    /// Per-showtime hold TTL override in seconds.
    pub hold_ttl_seconds: Option<u64>,
}
