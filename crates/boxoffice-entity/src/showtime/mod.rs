//! Showtime entity, status, and screen format.

pub mod format;
pub mod model;
pub mod status;

pub use format::ScreenFormat;
pub use model::{Showtime, ShowtimeDraft};
pub use status::ShowtimeStatus;
