//! Ticket status enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of an issued ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Admits the holder.
    Valid,
    /// Voided by a refund; kept for the audit trail.
    Canceled,
}

impl TicketStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
