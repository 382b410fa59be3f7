//! Expired-hold reaper job handler.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use boxoffice_inventory::registry::{InventoryRegistry, SweepReport};

/// Handles hold-reaper runs: one pass reclaims every lapsed hold across
/// every live inventory.
///
/// Safe to run concurrently with request-path operations: expiry moves
/// only lapsed `Held` seats to `Available`, under the same
/// per-inventory lock that `hold` and `confirm` take, so it can never
/// invalidate a seat another operation just legitimately transitioned.
#[derive(Debug)]
pub struct HoldReaperJob {
    /// All live inventories.
    registry: Arc<InventoryRegistry>,
}

impl HoldReaperJob {
    /// Create a new reaper job handler.
    pub fn new(registry: Arc<InventoryRegistry>) -> Self {
        Self { registry }
    }

    /// Run one sweep pass now.
    pub async fn run(&self) -> SweepReport {
        self.run_at(Utc::now()).await
    }

    /// Run one sweep pass against an explicit clock, for tests.
    pub async fn run_at(&self, now: DateTime<Utc>) -> SweepReport {
        let run_id = Uuid::new_v4();
        tracing::trace!(run = %run_id, "Hold reaper sweep starting");

        let report = self.registry.sweep_expired(now).await;

        if report.total() > 0 {
            tracing::info!(
                run = %run_id,
                reclaimed = report.total(),
                showtimes = report.reclaimed.len(),
                "Hold reaper reclaimed expired holds"
            );
        } else {
            tracing::trace!(run = %run_id, "Hold reaper found nothing to reclaim");
        }
        report
    }
}
