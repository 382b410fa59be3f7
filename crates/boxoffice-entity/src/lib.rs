//! # boxoffice-entity
//!
//! Domain entities for Marquee Box-Office: seats, orders, tickets,
//! showtimes, and auditoriums, with closed status enums so invalid
//! states are unrepresentable.

pub mod auditorium;
pub mod order;
pub mod seat;
pub mod showtime;
pub mod ticket;
