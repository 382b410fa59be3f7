//! Per-showtime seat inventory guarded by a Tokio mutex.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use boxoffice_core::types::id::{OrderId, ShowtimeId};
use boxoffice_core::types::seat_code::SeatId;
use boxoffice_core::{AppError, AppResult};
use boxoffice_entity::seat::{Seat, SeatCategory, SeatState};

use crate::snapshot::{Occupancy, RowSnapshot, SeatMapSnapshot};

/// Internal state for one showtime's seat set.
#[derive(Debug)]
struct InnerState {
    /// All seats, keyed by seat code. The key set is fixed at creation.
    seats: BTreeMap<SeatId, Seat>,
}

/// Seat inventory for a single showtime.
///
/// All mutations run under one exclusive section, so every operation is
/// atomic from the perspective of any observer: a batch either applies
/// to every requested seat or to none. External work (payment capture)
/// must happen between operations, never inside them.
#[derive(Debug, Clone)]
pub struct SeatInventory {
    /// The showtime this inventory belongs to.
    showtime_id: ShowtimeId,
    /// Protected seat set.
    state: Arc<Mutex<InnerState>>,
}

impl SeatInventory {
    /// Create an inventory over a fixed seat set.
    pub fn new(showtime_id: ShowtimeId, seats: Vec<Seat>) -> Self {
        let seats = seats.into_iter().map(|s| (s.id, s)).collect();
        Self {
            showtime_id,
            state: Arc::new(Mutex::new(InnerState { seats })),
        }
    }

    /// The showtime this inventory belongs to.
    pub fn showtime_id(&self) -> ShowtimeId {
        self.showtime_id
    }

    /// Place a time-limited hold on every listed seat for `order_id`.
    ///
    /// All-or-nothing: each seat must be available, carry a lapsed hold
    /// (reclaimed implicitly), or already be held by the same order
    /// (the expiry is refreshed). On any failure nothing is mutated and
    /// the offending seat is named in the error.
    pub async fn hold(
        &self,
        seat_ids: &[SeatId],
        order_id: OrderId,
        ttl: Duration,
    ) -> AppResult<()> {
        self.hold_at(seat_ids, order_id, ttl, Utc::now()).await
    }

    /// [`Self::hold`] with an explicit clock, for deterministic tests.
    pub async fn hold_at(
        &self,
        seat_ids: &[SeatId],
        order_id: OrderId,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if seat_ids.is_empty() {
            return Err(AppError::validation("No seats requested"));
        }

        let mut state = self.state.lock().await;

        // Validate the whole batch before touching anything.
        for seat_id in seat_ids {
            let seat = state
                .seats
                .get(seat_id)
                .ok_or_else(|| AppError::seat_not_found(seat_id))?;
            if !seat.holdable_by(order_id, now) {
                return Err(AppError::seat_unavailable(seat_id));
            }
        }

        let expires_at = now + ttl;
        for seat_id in seat_ids {
            if let Some(seat) = state.seats.get_mut(seat_id) {
                seat.state = SeatState::Held {
                    order_id,
                    expires_at,
                };
            }
        }

        info!(
            showtime = %self.showtime_id,
            order = %order_id,
            seats = seat_ids.len(),
            ttl_seconds = ttl.num_seconds(),
            "Seats held"
        );
        Ok(())
    }

    /// Return every listed seat held by `order_id` to available.
    ///
    /// Seats not held by this order are silently skipped, so the call
    /// is idempotent and safe to retry.
    pub async fn release(&self, seat_ids: &[SeatId], order_id: OrderId) {
        let mut state = self.state.lock().await;
        let mut released = 0usize;

        for seat_id in seat_ids {
            match state.seats.get_mut(seat_id) {
                Some(seat) if seat.state.is_held() && seat.state.order() == Some(order_id) => {
                    seat.state = SeatState::Available;
                    released += 1;
                }
                Some(_) | None => {
                    debug!(
                        showtime = %self.showtime_id,
                        order = %order_id,
                        seat = %seat_id,
                        "Release skipped seat not held by order"
                    );
                }
            }
        }

        if released > 0 {
            info!(
                showtime = %self.showtime_id,
                order = %order_id,
                released,
                "Seats released"
            );
        }
    }

    /// Finalize every listed seat as sold to `order_id`.
    ///
    /// Each seat must be held by this order with an unexpired hold,
    /// otherwise the whole batch fails `InvalidState` and no seat
    /// changes state.
    pub async fn confirm(&self, seat_ids: &[SeatId], order_id: OrderId) -> AppResult<()> {
        self.confirm_at(seat_ids, order_id, Utc::now()).await
    }

    /// [`Self::confirm`] with an explicit clock, for deterministic tests.
    pub async fn confirm_at(
        &self,
        seat_ids: &[SeatId],
        order_id: OrderId,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut state = self.state.lock().await;

        for seat_id in seat_ids {
            let seat = state
                .seats
                .get(seat_id)
                .ok_or_else(|| AppError::seat_not_found(seat_id))?;
            if !seat.held_by(order_id, now) {
                return Err(AppError::invalid_state(format!(
                    "Seat {seat_id} is not held by order {order_id}"
                )));
            }
        }

        for seat_id in seat_ids {
            if let Some(seat) = state.seats.get_mut(seat_id) {
                seat.state = SeatState::Sold { order_id };
            }
        }

        info!(
            showtime = %self.showtime_id,
            order = %order_id,
            seats = seat_ids.len(),
            "Seats confirmed"
        );
        Ok(())
    }

    /// Return sold seats to available as part of a refund.
    ///
    /// Each seat must be sold to `order_id`, otherwise the whole batch
    /// fails `InvalidState` and nothing changes.
    pub async fn refund_release(&self, seat_ids: &[SeatId], order_id: OrderId) -> AppResult<()> {
        let mut state = self.state.lock().await;

        for seat_id in seat_ids {
            let seat = state
                .seats
                .get(seat_id)
                .ok_or_else(|| AppError::seat_not_found(seat_id))?;
            if !seat.sold_to(order_id) {
                return Err(AppError::invalid_state(format!(
                    "Seat {seat_id} is not sold to order {order_id}"
                )));
            }
        }

        for seat_id in seat_ids {
            if let Some(seat) = state.seats.get_mut(seat_id) {
                seat.state = SeatState::Available;
            }
        }

        info!(
            showtime = %self.showtime_id,
            order = %order_id,
            seats = seat_ids.len(),
            "Sold seats returned by refund"
        );
        Ok(())
    }

    /// Reclaim every hold that has lapsed at `now`, returning the
    /// reclaimed seat ids.
    ///
    /// Reaper-only entry point: request-path code relies on the eager
    /// expiry check inside [`Self::hold_at`] instead, so request
    /// latency stays independent of sweep cost.
    pub async fn expire_sweep(&self, now: DateTime<Utc>) -> Vec<SeatId> {
        let mut state = self.state.lock().await;
        let mut reclaimed = Vec::new();

        for seat in state.seats.values_mut() {
            if seat.state.is_expired_hold(now) {
                seat.state = SeatState::Available;
                reclaimed.push(seat.id);
            }
        }

        if !reclaimed.is_empty() {
            info!(
                showtime = %self.showtime_id,
                reclaimed = reclaimed.len(),
                "Expired holds reclaimed"
            );
        }
        reclaimed
    }

    /// Pricing categories for the listed seats.
    pub async fn seat_categories(
        &self,
        seat_ids: &[SeatId],
    ) -> AppResult<Vec<(SeatId, SeatCategory)>> {
        let state = self.state.lock().await;
        seat_ids
            .iter()
            .map(|seat_id| {
                state
                    .seats
                    .get(seat_id)
                    .map(|seat| (*seat_id, seat.category))
                    .ok_or_else(|| AppError::seat_not_found(seat_id))
            })
            .collect()
    }

    /// Distinct orders currently holding or owning any seat.
    pub async fn active_orders(&self) -> Vec<OrderId> {
        let state = self.state.lock().await;
        let mut orders: Vec<OrderId> = state
            .seats
            .values()
            .filter_map(|seat| seat.state.order())
            .collect();
        orders.sort();
        orders.dedup();
        orders
    }

    /// Number of sold seats.
    pub async fn sold_count(&self) -> usize {
        let state = self.state.lock().await;
        state.seats.values().filter(|s| s.state.is_sold()).count()
    }

    /// Read-only seat-map snapshot, grouped by row.
    pub async fn snapshot(&self) -> SeatMapSnapshot {
        let state = self.state.lock().await;
        let mut rows: Vec<RowSnapshot> = Vec::new();

        for seat in state.seats.values() {
            match rows.last_mut() {
                Some(row) if row.row == seat.id.row() => row.seats.push(seat.clone()),
                _ => rows.push(RowSnapshot {
                    row: seat.id.row(),
                    seats: vec![seat.clone()],
                }),
            }
        }

        SeatMapSnapshot {
            showtime_id: self.showtime_id,
            taken_at: Utc::now(),
            rows,
        }
    }

    /// Current occupancy counters.
    pub async fn occupancy(&self) -> Occupancy {
        let state = self.state.lock().await;
        let mut occupancy = Occupancy {
            total: state.seats.len() as u32,
            available: 0,
            held: 0,
            sold: 0,
        };
        for seat in state.seats.values() {
            match seat.state {
                SeatState::Available => occupancy.available += 1,
                SeatState::Held { .. } => occupancy.held += 1,
                SeatState::Sold { .. } => occupancy.sold += 1,
            }
        }
        occupancy
    }
}
