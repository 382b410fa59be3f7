//! Marquee Box-Office — seat reservation and showtime scheduling engine.
//!
//! Composition root that wires the catalog, schedule, inventory,
//! booking, and worker crates together from one [`AppConfig`].

pub mod engine;
pub mod telemetry;

pub use boxoffice_core::config::AppConfig;
pub use engine::Engine;
