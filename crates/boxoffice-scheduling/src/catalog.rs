//! Auditorium catalog (the engine's resource registry).

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::info;

use boxoffice_core::types::id::AuditoriumId;
use boxoffice_core::{AppError, AppResult};
use boxoffice_entity::auditorium::Auditorium;
use boxoffice_entity::showtime::ScreenFormat;

/// Registry of physical screening rooms.
///
/// Read-mostly: rooms are registered at startup or rarely, and looked
/// up on every scheduling decision. Capacity is immutable once a room
/// is registered.
#[derive(Debug, Default)]
pub struct AuditoriumCatalog {
    auditoriums: DashMap<AuditoriumId, Auditorium>,
    next_id: AtomicU64,
}

impl AuditoriumCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            auditoriums: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a new auditorium and return its record.
    pub fn register(
        &self,
        name: impl Into<String>,
        capacity: u32,
        room_type: impl Into<String>,
        formats: Vec<ScreenFormat>,
    ) -> AppResult<Auditorium> {
        if capacity == 0 {
            return Err(AppError::validation("Auditorium capacity must be positive"));
        }
        if formats.is_empty() {
            return Err(AppError::validation(
                "Auditorium must support at least one format",
            ));
        }

        let id = AuditoriumId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let auditorium = Auditorium::new(id, name, capacity, room_type, formats);
        self.auditoriums.insert(id, auditorium.clone());
        info!(auditorium = %id, name = %auditorium.name, capacity, "Auditorium registered");
        Ok(auditorium)
    }

    /// Look up an auditorium.
    pub fn get(&self, id: AuditoriumId) -> AppResult<Auditorium> {
        self.auditoriums
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Auditorium {id} not found")))
    }

    /// All registered auditoriums, in id order.
    pub fn list(&self) -> Vec<Auditorium> {
        let mut all: Vec<Auditorium> = self
            .auditoriums
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|a| a.id);
        all
    }
}
