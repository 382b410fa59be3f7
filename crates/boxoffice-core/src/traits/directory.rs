//! Showtime directory trait consumed by the booking workflow.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::{AuditoriumId, ShowtimeId};
use crate::types::window::TimeWindow;

/// What the booking workflow needs to know about a showtime: which
/// auditorium it plays in, when, at what base price, and whether it is
/// still open for sale.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ShowtimeSummary {
    /// The showtime's identifier.
    pub showtime_id: ShowtimeId,
    /// The auditorium the showtime plays in.
    pub auditorium_id: AuditoriumId,
    /// The showtime's `[start, end)` window.
    pub window: TimeWindow,
    /// Base ticket price before seat-category multipliers.
    pub base_price: f64,
    /// Whether the showtime is currently scheduled (sellable).
    pub is_scheduled: bool,
    /// Per-showtime hold TTL override, if any.
    pub hold_ttl_seconds: Option<u64>,
}

/// Resolves showtimes for collaborators that must not depend on the
/// scheduling crate directly.
///
/// Implemented by the schedule service; consumed by the booking
/// workflow to validate orders and price seats.
#[async_trait]
pub trait ShowtimeDirectory: Send + Sync + 'static {
    /// Look up a showtime summary, failing with `EventNotFound` when
    /// the id is unknown.
    async fn resolve(&self, showtime_id: ShowtimeId) -> AppResult<ShowtimeSummary>;
}
