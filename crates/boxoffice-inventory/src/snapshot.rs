//! Read-only views over an inventory for query and reporting layers.
//!
//! Snapshots are detached copies; handing one out never exposes the
//! underlying seat collection to mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::types::id::ShowtimeId;
use boxoffice_entity::seat::Seat;

/// One row of the seat map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSnapshot {
    /// Row letter.
    pub row: char,
    /// Seats in the row, in seat-number order.
    pub seats: Vec<Seat>,
}

/// Detached copy of a showtime's seat map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMapSnapshot {
    /// The showtime the snapshot describes.
    pub showtime_id: ShowtimeId,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
    /// Rows in row-letter order.
    pub rows: Vec<RowSnapshot>,
}

impl SeatMapSnapshot {
    /// Total number of seats in the snapshot.
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|r| r.seats.len()).sum()
    }
}

/// Occupancy counters for one showtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Seats in the inventory.
    pub total: u32,
    /// Seats open for holding.
    pub available: u32,
    /// Seats under an active or lapsed hold.
    pub held: u32,
    /// Seats sold.
    pub sold: u32,
}

impl Occupancy {
    /// Fraction of seats not available: `(total - available) / total`.
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.total - self.available) / f64::from(self.total)
    }
}
