//! # boxoffice-scheduling
//!
//! Auditorium registry, buffered interval-conflict checking, and the
//! showtime lifecycle. The schedule service owns inventory creation and
//! destruction: an inventory exists exactly as long as its showtime.

pub mod catalog;
pub mod conflict;
pub mod query;
pub mod service;

pub use catalog::AuditoriumCatalog;
pub use query::ShowtimeFilter;
pub use service::{CanceledShowtime, ScheduleService};
