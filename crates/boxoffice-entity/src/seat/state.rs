//! Seat lifecycle state.
//!
//! The state is a data-carrying enum: a hold always knows its owning
//! order and expiry, a sold seat always knows its order, and an
//! available seat carries nothing. The invariants "held implies expiry
//! and holder" and "sold implies holder and no expiry" hold by
//! construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::types::id::OrderId;

/// Lifecycle state of one seat within a showtime's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeatState {
    /// Open for holding.
    Available,
    /// Soft-reserved by an order, pending payment.
    Held {
        /// The order holding the seat.
        order_id: OrderId,
        /// When the hold lapses and the seat becomes reclaimable.
        expires_at: DateTime<Utc>,
    },
    /// Finalized sale.
    Sold {
        /// The order that owns the seat.
        order_id: OrderId,
    },
}

impl SeatState {
    /// Whether the seat is in the `Available` state.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Whether the seat is held (expired or not).
    pub fn is_held(&self) -> bool {
        matches!(self, Self::Held { .. })
    }

    /// Whether the seat is sold.
    pub fn is_sold(&self) -> bool {
        matches!(self, Self::Sold { .. })
    }

    /// Whether the seat is held and the hold has lapsed at `now`.
    pub fn is_expired_hold(&self, now: DateTime<Utc>) -> bool {
        matches!(self, Self::Held { expires_at, .. } if *expires_at <= now)
    }

    /// The order currently holding or owning the seat, if any.
    pub fn order(&self) -> Option<OrderId> {
        match self {
            Self::Available => None,
            Self::Held { order_id, .. } | Self::Sold { order_id } => Some(*order_id),
        }
    }
}
