//! Engine wiring.

use std::sync::Arc;

use tracing::info;

use boxoffice_booking::BookingService;
use boxoffice_core::AppResult;
use boxoffice_core::config::AppConfig;
use boxoffice_core::traits::directory::ShowtimeDirectory;
use boxoffice_inventory::InventoryRegistry;
use boxoffice_scheduling::{AuditoriumCatalog, ScheduleService};
use boxoffice_worker::ReaperScheduler;

/// The assembled box-office engine.
///
/// Owns every service and the background reaper. Build one with
/// [`Engine::new`] for embedded/test use (no background tasks), or
/// [`Engine::start`] to also run the hold reaper on its cron cadence.
pub struct Engine {
    config: AppConfig,
    catalog: Arc<AuditoriumCatalog>,
    registry: Arc<InventoryRegistry>,
    schedule: Arc<ScheduleService>,
    booking: Arc<BookingService>,
    scheduler: Option<ReaperScheduler>,
}

impl Engine {
    /// Wire all services from configuration, without background tasks.
    pub fn new(config: AppConfig) -> Self {
        let catalog = Arc::new(AuditoriumCatalog::new());
        let registry = Arc::new(InventoryRegistry::new());
        let schedule = Arc::new(ScheduleService::new(
            &config.scheduling,
            Arc::clone(&catalog),
            Arc::clone(&registry),
        ));
        let directory: Arc<dyn ShowtimeDirectory> = schedule.clone();
        let booking = Arc::new(BookingService::new(
            config.booking.clone(),
            directory,
            Arc::clone(&registry),
        ));

        Self {
            config,
            catalog,
            registry,
            schedule,
            booking,
            scheduler: None,
        }
    }

    /// Wire all services and start the hold reaper.
    pub async fn start(config: AppConfig) -> AppResult<Self> {
        let mut engine = Self::new(config);

        let mut scheduler =
            ReaperScheduler::new(&engine.config.worker, Arc::clone(&engine.registry)).await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;
        engine.scheduler = Some(scheduler);

        info!("Box-office engine started");
        Ok(engine)
    }

    /// Stop background tasks. Idempotent.
    pub async fn shutdown(&mut self) -> AppResult<()> {
        if let Some(mut scheduler) = self.scheduler.take() {
            scheduler.shutdown().await?;
            info!("Box-office engine stopped");
        }
        Ok(())
    }

    /// The engine's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Auditorium catalog.
    pub fn catalog(&self) -> &Arc<AuditoriumCatalog> {
        &self.catalog
    }

    /// Live inventory registry.
    pub fn registry(&self) -> &Arc<InventoryRegistry> {
        &self.registry
    }

    /// Schedule service.
    pub fn schedule(&self) -> &Arc<ScheduleService> {
        &self.schedule
    }

    /// Booking workflow service.
    pub fn booking(&self) -> &Arc<BookingService> {
        &self.booking
    }
}
