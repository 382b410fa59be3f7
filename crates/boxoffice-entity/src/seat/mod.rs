//! Seat entity: category, lifecycle state, and the seat record itself.

pub mod category;
pub mod model;
pub mod state;

pub use category::SeatCategory;
pub use model::Seat;
pub use state::SeatState;
