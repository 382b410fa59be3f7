//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Settings for the scheduled background jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Seconds between hold-reaper sweeps.
    #[serde(default = "default_reaper_interval")]
    pub reaper_interval_seconds: u32,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            reaper_interval_seconds: default_reaper_interval(),
        }
    }
}

fn default_reaper_interval() -> u32 {
    5
}
