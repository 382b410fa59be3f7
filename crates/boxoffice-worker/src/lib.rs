//! # boxoffice-worker
//!
//! Background maintenance for the box-office engine. The hold reaper
//! runs off the request path on a fixed cadence, so request latency
//! never depends on sweep cost.

pub mod jobs;
pub mod scheduler;

pub use jobs::reaper::HoldReaperJob;
pub use scheduler::ReaperScheduler;
