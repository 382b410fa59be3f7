//! Auditorium entity model.

use serde::{Deserialize, Serialize};

use boxoffice_core::types::id::AuditoriumId;

use crate::showtime::format::ScreenFormat;

/// A physical screening room.
///
/// Capacity is immutable after creation and bounds the size of every
/// seat inventory scheduled into the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auditorium {
    /// Unique auditorium identifier, assigned by the catalog.
    pub id: AuditoriumId,
    /// Display name ("Theater 1", "IMAX Theater").
    pub name: String,
    /// Number of physical seats.
    pub capacity: u32,
    /// Room type label ("Standard", "IMAX", "4DX").
    pub room_type: String,
    /// Projection formats the room supports.
    pub formats: Vec<ScreenFormat>,
}

impl Auditorium {
    /// Create a new auditorium record.
    pub fn new(
        id: AuditoriumId,
        name: impl Into<String>,
        capacity: u32,
        room_type: impl Into<String>,
        formats: Vec<ScreenFormat>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            room_type: room_type.into(),
            formats,
        }
    }

    /// Whether the room can present the given format.
    pub fn supports_format(&self, format: ScreenFormat) -> bool {
        self.formats.contains(&format)
    }
}
