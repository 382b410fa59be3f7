//! Booking workflow orchestration.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use boxoffice_core::config::booking::BookingConfig;
use boxoffice_core::traits::directory::{ShowtimeDirectory, ShowtimeSummary};
use boxoffice_core::types::id::{OrderId, ShowtimeId};
use boxoffice_core::types::seat_code::SeatId;
use boxoffice_core::{AppError, AppResult};
use boxoffice_entity::order::{Order, OrderPaymentState};
use boxoffice_entity::ticket::{Ticket, TicketCode};
use boxoffice_inventory::registry::InventoryRegistry;
use boxoffice_inventory::snapshot::{Occupancy, SeatMapSnapshot};

use crate::orders::OrderStore;
use crate::pricing::{price_order, seat_price};
use crate::tickets::TicketStore;

/// Booking workflow service.
///
/// Owns the order and ticket stores; talks to showtimes through the
/// [`ShowtimeDirectory`] seam and to seats through the inventory
/// registry. Every multi-step operation either completes or rolls back
/// so no seat is ever left held without an order, and no order ever
/// references seats it does not hold.
pub struct BookingService {
    config: BookingConfig,
    directory: Arc<dyn ShowtimeDirectory>,
    registry: Arc<InventoryRegistry>,
    orders: OrderStore,
    tickets: TicketStore,
}

impl BookingService {
    /// Create a booking service.
    pub fn new(
        config: BookingConfig,
        directory: Arc<dyn ShowtimeDirectory>,
        registry: Arc<InventoryRegistry>,
    ) -> Self {
        Self {
            config,
            directory,
            registry,
            orders: OrderStore::new(),
            tickets: TicketStore::new(),
        }
    }

    fn hold_ttl(&self, summary: &ShowtimeSummary) -> Duration {
        let seconds = summary
            .hold_ttl_seconds
            .unwrap_or(self.config.default_hold_ttl_seconds);
        Duration::seconds(seconds as i64)
    }

    /// Hold seats and create a `Pending` order for them.
    ///
    /// Fails closed: if the hold fails nothing is stored, and if the
    /// order cannot be assembled after the hold, the hold is released.
    pub async fn place_order(
        &self,
        showtime_id: ShowtimeId,
        seat_ids: Vec<SeatId>,
        discount: f64,
    ) -> AppResult<Order> {
        if seat_ids.is_empty() {
            return Err(AppError::validation("No seats requested"));
        }
        if discount < 0.0 {
            return Err(AppError::validation("Discount cannot be negative"));
        }
        let mut seat_ids = seat_ids;
        seat_ids.sort();
        seat_ids.dedup();

        let summary = self.directory.resolve(showtime_id).await?;
        if !summary.is_scheduled {
            return Err(AppError::invalid_state(format!(
                "Showtime {showtime_id} is not open for sale"
            )));
        }

        let inventory = self.registry.get(showtime_id)?;
        let order_id = self.orders.next_id();
        inventory
            .hold(&seat_ids, order_id, self.hold_ttl(&summary))
            .await?;

        let categories = match inventory.seat_categories(&seat_ids).await {
            Ok(categories) => categories,
            Err(err) => {
                inventory.release(&seat_ids, order_id).await;
                return Err(err);
            }
        };
        let pricing = price_order(
            summary.base_price,
            &categories,
            self.config.tax_rate,
            discount,
        );

        let order = Order::new(order_id, showtime_id, seat_ids, pricing);
        self.orders.insert(order.clone());
        info!(
            order = %order.id,
            showtime = %showtime_id,
            seats = order.seat_ids.len(),
            total = order.pricing.total,
            "Order placed"
        );
        Ok(order)
    }

    /// Finalize a paid order: seats become sold and one ticket is
    /// issued per seat.
    ///
    /// This is the trigger point for the payment collaborator; payment
    /// settles between `place_order` and this call, outside any lock.
    pub async fn confirm_order(&self, order_id: OrderId) -> AppResult<(Order, Vec<Ticket>)> {
        let order = self.orders.get(order_id)?;
        if !order.is_pending() {
            return Err(AppError::invalid_state(format!(
                "Order {order_id} is {} and cannot be confirmed",
                order.payment_state
            )));
        }

        let summary = self.directory.resolve(order.showtime_id).await?;
        let inventory = self.registry.get(order.showtime_id)?;
        inventory.confirm(&order.seat_ids, order_id).await?;

        let categories = inventory.seat_categories(&order.seat_ids).await?;
        let seat_prices: Vec<(SeatId, f64)> = categories
            .iter()
            .map(|(seat_id, category)| (*seat_id, seat_price(summary.base_price, *category)))
            .collect();
        let tickets = self.tickets.issue(&order, &seat_prices);
        let updated = self
            .orders
            .update(order_id, |o| o.set_payment_state(OrderPaymentState::Paid))?;

        info!(order = %order_id, tickets = tickets.len(), "Order confirmed");
        Ok((updated, tickets))
    }

    /// Abandon a pending order, releasing its holds.
    pub async fn cancel_order(&self, order_id: OrderId) -> AppResult<Order> {
        let order = self.orders.get(order_id)?;
        if !order.is_pending() {
            return Err(AppError::invalid_state(format!(
                "Order {order_id} is {} and cannot be canceled",
                order.payment_state
            )));
        }

        let inventory = self.registry.get(order.showtime_id)?;
        inventory.release(&order.seat_ids, order_id).await;
        let updated = self.orders.update(order_id, |o| {
            o.set_payment_state(OrderPaymentState::Canceled)
        })?;

        info!(order = %order_id, "Order canceled");
        Ok(updated)
    }

    /// Reverse a paid order: seats return to available and every ticket
    /// is canceled (not deleted), preserving the audit trail.
    pub async fn refund_order(&self, order_id: OrderId, reason: &str) -> AppResult<Order> {
        let order = self.orders.get(order_id)?;
        if !order.is_paid() {
            return Err(AppError::invalid_state(format!(
                "Order {order_id} is {} and cannot be refunded",
                order.payment_state
            )));
        }

        let inventory = self.registry.get(order.showtime_id)?;
        inventory
            .refund_release(&order.seat_ids, order_id)
            .await?;
        let canceled = self.tickets.cancel_for_order(order_id);
        let updated = self.orders.update(order_id, |o| {
            o.set_payment_state(OrderPaymentState::Refunded)
        })?;

        info!(order = %order_id, tickets_canceled = canceled, reason, "Order refunded");
        Ok(updated)
    }

    /// Move an order to different seats and/or a different showtime.
    ///
    /// The new seats are held *first*; the old ones are only given up
    /// after that hold succeeds, so a failed exchange always leaves the
    /// original booking intact. Pending orders are re-seated; paid
    /// orders have the new seats confirmed immediately, the old seats
    /// refund-released, and their tickets reissued.
    pub async fn exchange_order(
        &self,
        order_id: OrderId,
        new_showtime_id: ShowtimeId,
        new_seat_ids: Vec<SeatId>,
    ) -> AppResult<Order> {
        let order = self.orders.get(order_id)?;
        if !matches!(
            order.payment_state,
            OrderPaymentState::Pending | OrderPaymentState::Paid
        ) {
            return Err(AppError::invalid_state(format!(
                "Order {order_id} is {} and cannot be exchanged",
                order.payment_state
            )));
        }
        if new_seat_ids.is_empty() {
            return Err(AppError::validation("No seats requested"));
        }
        let mut new_seat_ids = new_seat_ids;
        new_seat_ids.sort();
        new_seat_ids.dedup();

        let summary = self.directory.resolve(new_showtime_id).await?;
        if !summary.is_scheduled {
            return Err(AppError::invalid_state(format!(
                "Showtime {new_showtime_id} is not open for sale"
            )));
        }

        let new_inventory = self.registry.get(new_showtime_id)?;
        let old_inventory = self.registry.get(order.showtime_id)?;

        // Step 1: secure the new seats. On failure the old booking is
        // untouched.
        new_inventory
            .hold(&new_seat_ids, order_id, self.hold_ttl(&summary))
            .await?;

        // When re-seating within the same showtime, seats kept across
        // the exchange were just re-held above and must not be released.
        let to_release: Vec<SeatId> = if order.showtime_id == new_showtime_id {
            order
                .seat_ids
                .iter()
                .copied()
                .filter(|seat| !new_seat_ids.contains(seat))
                .collect()
        } else {
            order.seat_ids.clone()
        };

        let categories = new_inventory.seat_categories(&new_seat_ids).await?;
        let pricing = price_order(
            summary.base_price,
            &categories,
            self.config.tax_rate,
            order.pricing.discount,
        );

        match order.payment_state {
            OrderPaymentState::Pending => {
                old_inventory.release(&to_release, order_id).await;
                let updated = self.orders.update(order_id, |o| {
                    o.showtime_id = new_showtime_id;
                    o.seat_ids = new_seat_ids.clone();
                    o.pricing = pricing;
                    o.updated_at = Utc::now();
                })?;
                info!(order = %order_id, showtime = %new_showtime_id, "Pending order re-seated");
                Ok(updated)
            }
            OrderPaymentState::Paid => {
                // Finalize the new seats while we still hold them.
                if let Err(err) = new_inventory.confirm(&new_seat_ids, order_id).await {
                    new_inventory.release(&new_seat_ids, order_id).await;
                    return Err(err);
                }
                if let Err(err) = old_inventory
                    .refund_release(&to_release, order_id)
                    .await
                {
                    // Roll the new sale back so the order is not double
                    // seated; the original seats were never touched.
                    let _ = new_inventory
                        .refund_release(&new_seat_ids, order_id)
                        .await;
                    return Err(err);
                }

                self.tickets.cancel_for_order(order_id);
                let updated = self.orders.update(order_id, |o| {
                    o.showtime_id = new_showtime_id;
                    o.seat_ids = new_seat_ids.clone();
                    o.pricing = pricing;
                    o.updated_at = Utc::now();
                })?;
                let seat_prices: Vec<(SeatId, f64)> = categories
                    .iter()
                    .map(|(seat_id, category)| {
                        (*seat_id, seat_price(summary.base_price, *category))
                    })
                    .collect();
                let tickets = self.tickets.issue(&updated, &seat_prices);
                info!(
                    order = %order_id,
                    showtime = %new_showtime_id,
                    tickets = tickets.len(),
                    "Paid order exchanged"
                );
                Ok(updated)
            }
            // Unreachable: checked above.
            _ => Err(AppError::internal("Exchange reached a terminal order")),
        }
    }

    /// Look up an order.
    pub fn order(&self, order_id: OrderId) -> AppResult<Order> {
        self.orders.get(order_id)
    }

    /// All orders for a showtime.
    pub fn orders_for_showtime(&self, showtime_id: ShowtimeId) -> Vec<Order> {
        self.orders.list_by_showtime(showtime_id)
    }

    /// Look up a ticket by code.
    pub fn ticket(&self, code: &TicketCode) -> AppResult<Ticket> {
        self.tickets.get(code)
    }

    /// All tickets for an order.
    pub fn tickets_for_order(&self, order_id: OrderId) -> Vec<Ticket> {
        self.tickets.by_order(order_id)
    }

    /// Whether a code names an existing, still-valid ticket.
    pub fn validate_ticket(&self, code: &TicketCode) -> bool {
        self.tickets.validate(code)
    }

    /// Read-only seat map for a showtime.
    pub async fn seat_map(&self, showtime_id: ShowtimeId) -> AppResult<SeatMapSnapshot> {
        Ok(self.registry.get(showtime_id)?.snapshot().await)
    }

    /// Occupancy counters for a showtime.
    pub async fn occupancy(&self, showtime_id: ShowtimeId) -> AppResult<Occupancy> {
        Ok(self.registry.get(showtime_id)?.occupancy().await)
    }
}
