//! Order payment state enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment lifecycle of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPaymentState {
    /// Seats are held; payment has not settled.
    Pending,
    /// Payment settled; seats are sold and tickets issued.
    Paid,
    /// Holds were released before payment.
    Canceled,
    /// A paid order was reversed; seats returned, tickets canceled.
    Refunded,
}

impl OrderPaymentState {
    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Canceled | Self::Refunded)
    }

    /// Return the state as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Canceled => "canceled",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for OrderPaymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
