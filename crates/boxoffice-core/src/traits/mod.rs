//! Trait seams between the engine's crates.

pub mod directory;

pub use directory::{ShowtimeDirectory, ShowtimeSummary};
