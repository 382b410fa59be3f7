//! Auditorium entity.

pub mod model;

pub use model::Auditorium;
