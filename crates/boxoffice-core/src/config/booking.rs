//! Booking workflow configuration.

use serde::{Deserialize, Serialize};

/// Settings for the order/hold workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// How long a seat hold lives before the reaper may reclaim it,
    /// unless the showtime overrides it.
    #[serde(default = "default_hold_ttl")]
    pub default_hold_ttl_seconds: u64,
    /// Sales tax applied to order subtotals.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_hold_ttl_seconds: default_hold_ttl(),
            tax_rate: default_tax_rate(),
        }
    }
}

fn default_hold_ttl() -> u64 {
    300
}

fn default_tax_rate() -> f64 {
    0.10
}
