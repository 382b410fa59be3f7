//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::types::id::{OrderId, ShowtimeId};
use boxoffice_core::types::seat_code::SeatId;

use super::status::OrderPaymentState;

/// Monetary breakdown of an order. All amounts are non-negative and
/// `total = subtotal + tax - discount`, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderPricing {
    /// Sum of per-seat prices before tax.
    pub subtotal: f64,
    /// Tax on the subtotal.
    pub tax: f64,
    /// Discount subtracted from the total.
    pub discount: f64,
    /// Amount due.
    pub total: f64,
}

impl OrderPricing {
    /// A zero-value pricing record.
    pub fn zero() -> Self {
        Self {
            subtotal: 0.0,
            tax: 0.0,
            discount: 0.0,
            total: 0.0,
        }
    }
}

/// A booking order.
///
/// Created `Pending` once its seats are successfully held; every seat
/// it references is held or sold by this order's id for the order's
/// whole life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier, assigned by the order store.
    pub id: OrderId,
    /// The showtime the seats belong to.
    pub showtime_id: ShowtimeId,
    /// The seats this order holds or owns. Non-empty, no duplicates.
    pub seat_ids: Vec<SeatId>,
    /// Monetary breakdown.
    pub pricing: OrderPricing,
    /// Payment lifecycle state.
    pub payment_state: OrderPaymentState,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// Last state-change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new pending order.
    pub fn new(
        id: OrderId,
        showtime_id: ShowtimeId,
        seat_ids: Vec<SeatId>,
        pricing: OrderPricing,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            showtime_id,
            seat_ids,
            pricing,
            payment_state: OrderPaymentState::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether payment is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.payment_state == OrderPaymentState::Pending
    }

    /// Whether the order has been paid and not reversed.
    pub fn is_paid(&self) -> bool {
        self.payment_state == OrderPaymentState::Paid
    }

    /// Move the order to a new payment state, touching `updated_at`.
    pub fn set_payment_state(&mut self, state: OrderPaymentState) {
        self.payment_state = state;
        self.updated_at = Utc::now();
    }
}
