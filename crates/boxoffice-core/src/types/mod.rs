//! Shared value types: typed identifiers, seat codes, and time windows.

pub mod id;
pub mod seat_code;
pub mod window;

pub use id::{AuditoriumId, OrderId, ShowtimeId};
pub use seat_code::SeatId;
pub use window::TimeWindow;
