//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use boxoffice_core::config::worker::WorkerConfig;
use boxoffice_core::error::AppError;
use boxoffice_inventory::registry::InventoryRegistry;

use crate::jobs::reaper::HoldReaperJob;

/// Cron-based scheduler for the engine's background tasks.
pub struct ReaperScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// The reaper job handler shared with scheduled closures.
    reaper: Arc<HoldReaperJob>,
    /// Seconds between reaper sweeps.
    interval_seconds: u32,
}

impl std::fmt::Debug for ReaperScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaperScheduler")
            .field("interval_seconds", &self.interval_seconds)
            .finish()
    }
}

impl ReaperScheduler {
    /// Create a new scheduler over the live inventory registry.
    pub async fn new(
        config: &WorkerConfig,
        registry: Arc<InventoryRegistry>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            reaper: Arc::new(HoldReaperJob::new(registry)),
            // Seconds-granularity cron field only goes to 59.
            interval_seconds: config.reaper_interval_seconds.clamp(1, 59),
        })
    }

    /// Register all default scheduled tasks.
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_hold_reaper().await?;
        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        tracing::info!("Reaper scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Reaper scheduler shut down");
        Ok(())
    }

    /// Hold reaper — every few seconds, per `worker.reaper_interval_seconds`.
    async fn register_hold_reaper(&self) -> Result<(), AppError> {
        let reaper = Arc::clone(&self.reaper);
        let schedule = format!("*/{} * * * * *", self.interval_seconds);
        let job = CronJob::new_async(schedule.as_str(), move |_uuid, _lock| {
            let reaper = Arc::clone(&reaper);
            Box::pin(async move {
                reaper.run().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create hold_reaper schedule: {e}"))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add hold_reaper schedule: {e}"))
        })?;

        tracing::info!(
            "Registered: hold_reaper (every {}s)",
            self.interval_seconds
        );
        Ok(())
    }
}
