//! Background job handlers.

pub mod reaper;
