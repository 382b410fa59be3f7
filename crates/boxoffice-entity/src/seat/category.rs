//! Seat category (pricing tier) enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pricing tier of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatCategory {
    /// Regular seat at base price.
    Standard,
    /// Double-width couple seat.
    Couple,
    /// VIP row seat.
    Vip,
    /// Premium recliner.
    Premium,
}

impl SeatCategory {
    /// Multiplier applied to the showtime's base price.
    pub fn price_multiplier(&self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Couple => 1.3,
            Self::Vip => 1.5,
            Self::Premium => 1.8,
        }
    }

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Couple => "couple",
            Self::Vip => "vip",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for SeatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
