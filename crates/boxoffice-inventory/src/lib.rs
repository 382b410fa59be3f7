//! # boxoffice-inventory
//!
//! Per-showtime seat inventories. Each [`SeatInventory`] is an
//! independently lockable unit: one exclusive section guards all
//! mutations to one showtime's seat set, so holds, confirmations,
//! releases, and expiry sweeps on the same showtime never interleave
//! at the single-seat level, while different showtimes proceed fully
//! in parallel.

pub mod inventory;
pub mod layout;
pub mod registry;
pub mod snapshot;

pub use inventory::SeatInventory;
pub use registry::{InventoryRegistry, SweepReport};
pub use snapshot::{Occupancy, RowSnapshot, SeatMapSnapshot};
