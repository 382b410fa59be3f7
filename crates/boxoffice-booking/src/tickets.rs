//! Ticket store: issuance, lookup, and refund cancellation.

use dashmap::DashMap;
use rand::RngExt;
use tracing::info;

use boxoffice_core::types::id::OrderId;
use boxoffice_core::types::seat_code::SeatId;
use boxoffice_core::{AppError, AppResult};
use boxoffice_entity::order::Order;
use boxoffice_entity::ticket::{Ticket, TicketCode, TicketStatus};

/// Owns every issued ticket, keyed by ticket code. Tickets are never
/// deleted; refunds cancel them in place.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: DashMap<TicketCode, Ticket>,
}

impl TicketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tickets: DashMap::new(),
        }
    }

    /// Generate a code of the form `TKT<order-digits><random suffix>`,
    /// retrying the random suffix on the (rare) collision.
    fn generate_code(&self, order_id: OrderId) -> TicketCode {
        loop {
            let suffix: u64 = rand::rng().random_range(0..1000);
            let code = TicketCode::new(format!(
                "TKT{:06}",
                order_id.as_u64() * 1000 + suffix
            ));
            if !self.tickets.contains_key(&code) {
                return code;
            }
        }
    }

    /// Issue one valid ticket per priced seat of a confirmed order.
    pub fn issue(&self, order: &Order, seat_prices: &[(SeatId, f64)]) -> Vec<Ticket> {
        let mut issued = Vec::with_capacity(seat_prices.len());
        for (seat_id, price) in seat_prices {
            let code = self.generate_code(order.id);
            let ticket = Ticket::new(code.clone(), order.id, order.showtime_id, *seat_id, *price);
            self.tickets.insert(code, ticket.clone());
            issued.push(ticket);
        }
        info!(order = %order.id, tickets = issued.len(), "Tickets issued");
        issued
    }

    /// Look up a ticket by code.
    pub fn get(&self, code: &TicketCode) -> AppResult<Ticket> {
        self.tickets
            .get(code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Ticket {code} not found")))
    }

    /// Whether a code names an existing, still-valid ticket.
    pub fn validate(&self, code: &TicketCode) -> bool {
        self.tickets
            .get(code)
            .map(|entry| entry.value().is_valid())
            .unwrap_or(false)
    }

    /// All tickets for one order, in seat order.
    pub fn by_order(&self, order_id: OrderId) -> Vec<Ticket> {
        let mut results: Vec<Ticket> = self
            .tickets
            .iter()
            .filter(|entry| entry.value().order_id == order_id)
            .map(|entry| entry.value().clone())
            .collect();
        results.sort_by_key(|t| t.seat_id);
        results
    }

    /// Cancel every valid ticket of an order, returning how many
    /// flipped. Already-canceled tickets are left untouched.
    pub fn cancel_for_order(&self, order_id: OrderId) -> usize {
        let mut canceled = 0usize;
        for mut entry in self.tickets.iter_mut() {
            let ticket = entry.value_mut();
            if ticket.order_id == order_id && ticket.status == TicketStatus::Valid {
                ticket.status = TicketStatus::Canceled;
                canceled += 1;
            }
        }
        if canceled > 0 {
            info!(order = %order_id, canceled, "Tickets canceled");
        }
        canceled
    }
}
