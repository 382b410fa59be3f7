//! Seat record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::types::id::OrderId;
use boxoffice_core::types::seat_code::SeatId;

use super::category::SeatCategory;
use super::state::SeatState;

/// One seat in a showtime's inventory.
///
/// The seat identity set is fixed when the inventory is created; only
/// `state` ever mutates afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// The seat's code within the auditorium (`A01`, ...).
    pub id: SeatId,
    /// Pricing tier.
    pub category: SeatCategory,
    /// Current lifecycle state.
    pub state: SeatState,
}

impl Seat {
    /// Create a new available seat.
    pub fn new(id: SeatId, category: SeatCategory) -> Self {
        Self {
            id,
            category,
            state: SeatState::Available,
        }
    }

    /// Whether a hold request by `order_id` at `now` may take this seat:
    /// it is available, its hold has lapsed, or it is already held by
    /// the same order (re-hold refreshes the expiry).
    pub fn holdable_by(&self, order_id: OrderId, now: DateTime<Utc>) -> bool {
        match self.state {
            SeatState::Available => true,
            SeatState::Held { order_id: holder, expires_at } => {
                holder == order_id || expires_at <= now
            }
            SeatState::Sold { .. } => false,
        }
    }

    /// Whether the seat is held by `order_id` with an unexpired hold.
    pub fn held_by(&self, order_id: OrderId, now: DateTime<Utc>) -> bool {
        matches!(
            self.state,
            SeatState::Held { order_id: holder, expires_at }
                if holder == order_id && expires_at > now
        )
    }

    /// Whether the seat is sold to `order_id`.
    pub fn sold_to(&self, order_id: OrderId) -> bool {
        matches!(self.state, SeatState::Sold { order_id: owner } if owner == order_id)
    }
}
