//! Ticket entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_core::types::id::{OrderId, ShowtimeId};
use boxoffice_core::types::seat_code::SeatId;

use super::status::TicketStatus;

/// Printable ticket code (`TKT` followed by six digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketCode(String);

impl TicketCode {
    /// Wrap an already-formatted code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One admission ticket for one seat of a confirmed order.
///
/// Tickets are created at confirmation and canceled, never deleted, on
/// refund, preserving the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Printable ticket code.
    pub code: TicketCode,
    /// The confirmed order that produced this ticket.
    pub order_id: OrderId,
    /// The showtime the ticket admits to.
    pub showtime_id: ShowtimeId,
    /// The seat the ticket covers.
    pub seat_id: SeatId,
    /// Price paid for this seat.
    pub price: f64,
    /// Current status.
    pub status: TicketStatus,
    /// When the ticket was issued.
    pub issued_at: DateTime<Utc>,
}

impl Ticket {
    /// Issue a new valid ticket.
    pub fn new(
        code: TicketCode,
        order_id: OrderId,
        showtime_id: ShowtimeId,
        seat_id: SeatId,
        price: f64,
    ) -> Self {
        Self {
            code,
            order_id,
            showtime_id,
            seat_id,
            price,
            status: TicketStatus::Valid,
            issued_at: Utc::now(),
        }
    }

    /// Whether the ticket still admits its holder.
    pub fn is_valid(&self) -> bool {
        self.status == TicketStatus::Valid
    }
}
