//! Newtype wrappers around `u64` for all domain entity identifiers.
//!
//! Using distinct types prevents accidentally passing an `OrderId` where
//! a `ShowtimeId` is expected. Identifiers are sequential arena indices
//! assigned by the owning store, so a stable id never dangles when the
//! underlying collection reallocates.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `u64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create an identifier from a raw value.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Return the inner value.
            pub fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a showtime.
    ShowtimeId
);

define_id!(
    /// Unique identifier for an auditorium.
    AuditoriumId
);

define_id!(
    /// Unique identifier for an order.
    OrderId
);
