//! Registry of all live seat inventories.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::info;

use boxoffice_core::types::id::ShowtimeId;
use boxoffice_core::types::seat_code::SeatId;
use boxoffice_core::{AppError, AppResult};
use boxoffice_entity::seat::Seat;

use crate::inventory::SeatInventory;

/// Outcome of one reaper pass over every live inventory.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Seats reclaimed per showtime; showtimes with nothing reclaimed
    /// are omitted.
    pub reclaimed: Vec<(ShowtimeId, Vec<SeatId>)>,
}

impl SweepReport {
    /// Total number of seats reclaimed in this pass.
    pub fn total(&self) -> usize {
        self.reclaimed.iter().map(|(_, seats)| seats.len()).sum()
    }
}

/// All live seat inventories, one per scheduled showtime.
///
/// The registry is the only shared handle to inventories; callers get
/// `Arc<SeatInventory>` clones and go through the inventory's own entry
/// points for every mutation.
#[derive(Debug, Default)]
pub struct InventoryRegistry {
    inventories: DashMap<ShowtimeId, Arc<SeatInventory>>,
}

impl InventoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inventories: DashMap::new(),
        }
    }

    /// Create and register the inventory for a newly scheduled showtime.
    ///
    /// Fails `InvalidState` if the showtime already has an inventory;
    /// the seat-identity set is fixed here for the inventory's life.
    pub fn create(&self, showtime_id: ShowtimeId, seats: Vec<Seat>) -> AppResult<Arc<SeatInventory>> {
        let inventory = Arc::new(SeatInventory::new(showtime_id, seats));
        match self.inventories.entry(showtime_id) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(AppError::invalid_state(format!(
                "Showtime {showtime_id} already has an inventory"
            ))),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&inventory));
                info!(showtime = %showtime_id, "Inventory created");
                Ok(inventory)
            }
        }
    }

    /// Look up the inventory for a showtime.
    pub fn get(&self, showtime_id: ShowtimeId) -> AppResult<Arc<SeatInventory>> {
        self.inventories
            .get(&showtime_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| AppError::event_not_found(showtime_id))
    }

    /// Destroy the inventory for a permanently removed showtime.
    pub fn remove(&self, showtime_id: ShowtimeId) -> Option<Arc<SeatInventory>> {
        let removed = self.inventories.remove(&showtime_id).map(|(_, inv)| inv);
        if removed.is_some() {
            info!(showtime = %showtime_id, "Inventory removed");
        }
        removed
    }

    /// Number of live inventories.
    pub fn len(&self) -> usize {
        self.inventories.len()
    }

    /// Whether no inventories are registered.
    pub fn is_empty(&self) -> bool {
        self.inventories.is_empty()
    }

    /// Run an expiry sweep across every live inventory.
    ///
    /// Inventory handles are collected first so no registry shard lock
    /// is held while sweeping.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> SweepReport {
        let handles: Vec<Arc<SeatInventory>> = self
            .inventories
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();

        let mut report = SweepReport::default();
        for inventory in handles {
            let reclaimed = inventory.expire_sweep(now).await;
            if !reclaimed.is_empty() {
                report.reclaimed.push((inventory.showtime_id(), reclaimed));
            }
        }
        report
    }
}
