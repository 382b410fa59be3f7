//! Showtime lifecycle service.
//!
//! Creation and every time/auditorium mutation run under a
//! per-auditorium mutex, the same exclusion the conflict check reads
//! under, so "check no conflict" and "insert showtime" cannot race.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{info, warn};

use boxoffice_core::config::scheduling::SchedulingConfig;
use boxoffice_core::traits::directory::{ShowtimeDirectory, ShowtimeSummary};
use boxoffice_core::types::id::{AuditoriumId, OrderId, ShowtimeId};
use boxoffice_core::types::window::TimeWindow;
use boxoffice_core::{AppError, AppResult};
use boxoffice_entity::showtime::{ScreenFormat, Showtime, ShowtimeDraft, ShowtimeStatus};
use boxoffice_inventory::layout::generate_seats;
use boxoffice_inventory::registry::InventoryRegistry;
use boxoffice_inventory::snapshot::Occupancy;

use crate::catalog::AuditoriumCatalog;
use crate::conflict::windows_overlap;
use crate::query::ShowtimeFilter;

/// Result of canceling a showtime.
///
/// The affected orders still hold or own seats in the canceled
/// showtime's inventory; the booking workflow must route them through
/// its refund/cancel paths before the showtime can be removed.
#[derive(Debug, Clone)]
pub struct CanceledShowtime {
    /// The showtime after cancellation.
    pub showtime: Showtime,
    /// Orders still holding or owning seats, distinct and sorted.
    pub affected_orders: Vec<OrderId>,
}

/// Schedule service: showtime lifecycle plus the conflict gate.
#[derive(Debug)]
pub struct ScheduleService {
    /// Turnaround buffer applied during conflict comparison.
    buffer: Duration,
    /// Auditorium registry.
    catalog: Arc<AuditoriumCatalog>,
    /// Live seat inventories (owned lifecycle: created on schedule,
    /// destroyed on permanent removal).
    registry: Arc<InventoryRegistry>,
    /// All showtimes by id.
    showtimes: DashMap<ShowtimeId, Showtime>,
    /// Next showtime id.
    next_id: AtomicU64,
    /// Per-auditorium mutation locks.
    auditorium_locks: DashMap<AuditoriumId, Arc<Mutex<()>>>,
}

impl ScheduleService {
    /// Create a schedule service.
    pub fn new(
        config: &SchedulingConfig,
        catalog: Arc<AuditoriumCatalog>,
        registry: Arc<InventoryRegistry>,
    ) -> Self {
        Self {
            buffer: Duration::minutes(config.turnaround_buffer_minutes),
            catalog,
            registry,
            showtimes: DashMap::new(),
            next_id: AtomicU64::new(1),
            auditorium_locks: DashMap::new(),
        }
    }

    fn lock_for(&self, auditorium_id: AuditoriumId) -> Arc<Mutex<()>> {
        let entry = self.auditorium_locks.entry(auditorium_id).or_default();
        Arc::clone(entry.value())
    }

    /// Whether a candidate window collides with any scheduled showtime
    /// on the auditorium, excluding `exclude` (used when mutating an
    /// existing showtime so it does not conflict with itself).
    pub fn overlaps(
        &self,
        auditorium_id: AuditoriumId,
        window: &TimeWindow,
        exclude: Option<ShowtimeId>,
    ) -> bool {
        self.find_conflict(auditorium_id, window, exclude).is_some()
    }

    fn find_conflict(
        &self,
        auditorium_id: AuditoriumId,
        window: &TimeWindow,
        exclude: Option<ShowtimeId>,
    ) -> Option<ShowtimeId> {
        self.showtimes.iter().find_map(|entry| {
            let existing = entry.value();
            let excluded = exclude == Some(existing.id);
            if existing.auditorium_id == auditorium_id
                && existing.status == ShowtimeStatus::Scheduled
                && !excluded
                && windows_overlap(window, &existing.window, self.buffer)
            {
                Some(existing.id)
            } else {
                None
            }
        })
    }

    /// Schedule a new showtime and create its seat inventory.
    pub async fn create_showtime(&self, draft: ShowtimeDraft) -> AppResult<Showtime> {
        let auditorium = self.catalog.get(draft.auditorium_id)?;
        if !auditorium.supports_format(draft.format) {
            return Err(AppError::validation(format!(
                "Auditorium {} does not support format {}",
                auditorium.id, draft.format
            )));
        }
        if draft.base_price <= 0.0 {
            return Err(AppError::validation("Base price must be positive"));
        }
        let seats_total = draft.seats_total.unwrap_or(auditorium.capacity);
        if seats_total > auditorium.capacity {
            return Err(AppError::capacity_exceeded(format!(
                "Requested {seats_total} seats but auditorium {} holds {}",
                auditorium.id, auditorium.capacity
            )));
        }
        if draft.window.start <= Utc::now() {
            return Err(AppError::validation("Cannot schedule a showtime in the past"));
        }

        let seats = generate_seats(seats_total)?;

        let lock = self.lock_for(draft.auditorium_id);
        let _guard = lock.lock().await;

        if let Some(conflicting) = self.find_conflict(draft.auditorium_id, &draft.window, None) {
            return Err(AppError::event_conflict(format!(
                "Window overlaps showtime {conflicting} on auditorium {}",
                draft.auditorium_id
            )));
        }

        let id = ShowtimeId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let showtime = Showtime {
            id,
            auditorium_id: draft.auditorium_id,
            window: draft.window,
            format: draft.format,
            base_price: draft.base_price,
            seats_total,
            hold_ttl_seconds: draft.hold_ttl_seconds,
            status: ShowtimeStatus::Scheduled,
            created_at: Utc::now(),
        };
        self.registry.create(id, seats)?;
        self.showtimes.insert(id, showtime.clone());

        info!(
            showtime = %id,
            auditorium = %showtime.auditorium_id,
            start = %showtime.window.start,
            seats = seats_total,
            "Showtime scheduled"
        );
        Ok(showtime)
    }

    /// Move a showtime to a new window and, optionally, a new
    /// auditorium. Refused once any seat is held or sold; use
    /// [`Self::update_pricing`] for the edits that stay legal then.
    pub async fn reschedule(
        &self,
        showtime_id: ShowtimeId,
        new_window: TimeWindow,
        new_auditorium: Option<AuditoriumId>,
    ) -> AppResult<Showtime> {
        let current = self.find(showtime_id)?;
        if !current.is_scheduled() {
            return Err(AppError::invalid_state(format!(
                "Showtime {showtime_id} is {} and cannot be rescheduled",
                current.status
            )));
        }

        let occupancy = self.registry.get(showtime_id)?.occupancy().await;
        if occupancy.available != occupancy.total {
            return Err(AppError::invalid_state(format!(
                "Showtime {showtime_id} has held or sold seats; only pricing updates are allowed"
            )));
        }

        let target_auditorium_id = new_auditorium.unwrap_or(current.auditorium_id);
        let auditorium = self.catalog.get(target_auditorium_id)?;
        if !auditorium.supports_format(current.format) {
            return Err(AppError::validation(format!(
                "Auditorium {} does not support format {}",
                auditorium.id, current.format
            )));
        }
        if current.seats_total > auditorium.capacity {
            return Err(AppError::capacity_exceeded(format!(
                "Showtime needs {} seats but auditorium {} holds {}",
                current.seats_total, auditorium.id, auditorium.capacity
            )));
        }
        if new_window.start <= Utc::now() {
            return Err(AppError::validation("Cannot reschedule a showtime into the past"));
        }

        let lock = self.lock_for(target_auditorium_id);
        let _guard = lock.lock().await;

        if let Some(conflicting) =
            self.find_conflict(target_auditorium_id, &new_window, Some(showtime_id))
        {
            return Err(AppError::event_conflict(format!(
                "Window overlaps showtime {conflicting} on auditorium {target_auditorium_id}"
            )));
        }

        let mut entry = self
            .showtimes
            .get_mut(&showtime_id)
            .ok_or_else(|| AppError::event_not_found(showtime_id))?;
        entry.window = new_window;
        entry.auditorium_id = target_auditorium_id;

        info!(
            showtime = %showtime_id,
            auditorium = %target_auditorium_id,
            start = %new_window.start,
            "Showtime rescheduled"
        );
        Ok(entry.clone())
    }

    /// Edits that stay legal after tickets are held or sold: base price
    /// and projection format.
    pub async fn update_pricing(
        &self,
        showtime_id: ShowtimeId,
        base_price: Option<f64>,
        format: Option<ScreenFormat>,
    ) -> AppResult<Showtime> {
        let current = self.find(showtime_id)?;
        if !current.is_scheduled() {
            return Err(AppError::invalid_state(format!(
                "Showtime {showtime_id} is {} and cannot be updated",
                current.status
            )));
        }
        if let Some(price) = base_price {
            if price <= 0.0 {
                return Err(AppError::validation("Base price must be positive"));
            }
        }
        if let Some(format) = format {
            let auditorium = self.catalog.get(current.auditorium_id)?;
            if !auditorium.supports_format(format) {
                return Err(AppError::validation(format!(
                    "Auditorium {} does not support format {format}",
                    auditorium.id
                )));
            }
        }

        let mut entry = self
            .showtimes
            .get_mut(&showtime_id)
            .ok_or_else(|| AppError::event_not_found(showtime_id))?;
        if let Some(price) = base_price {
            entry.base_price = price;
        }
        if let Some(format) = format {
            entry.format = format;
        }
        Ok(entry.clone())
    }

    /// Cancel a showtime.
    ///
    /// The status flips to `Canceled` immediately (its window stops
    /// blocking the auditorium); orders still holding or owning seats
    /// are returned so the booking workflow can run its refund/cancel
    /// paths. The inventory stays alive until [`Self::remove_showtime`].
    pub async fn cancel_showtime(
        &self,
        showtime_id: ShowtimeId,
        reason: &str,
    ) -> AppResult<CanceledShowtime> {
        let current = self.find(showtime_id)?;
        let lock = self.lock_for(current.auditorium_id);
        {
            let _guard = lock.lock().await;
            let mut entry = self
                .showtimes
                .get_mut(&showtime_id)
                .ok_or_else(|| AppError::event_not_found(showtime_id))?;
            if entry.status != ShowtimeStatus::Scheduled {
                return Err(AppError::invalid_state(format!(
                    "Showtime {showtime_id} is already {}",
                    entry.status
                )));
            }
            entry.status = ShowtimeStatus::Canceled;
        }

        let inventory = self.registry.get(showtime_id)?;
        let affected_orders = inventory.active_orders().await;
        let sold = inventory.sold_count().await;
        if sold > 0 {
            warn!(
                showtime = %showtime_id,
                sold,
                affected = affected_orders.len(),
                "Canceled showtime has sold seats; refund handling required"
            );
        }
        info!(showtime = %showtime_id, reason, "Showtime canceled");

        Ok(CanceledShowtime {
            showtime: self.find(showtime_id)?,
            affected_orders,
        })
    }

    /// Permanently remove a canceled or completed showtime, destroying
    /// its inventory. Refused while sold seats remain unrefunded.
    pub async fn remove_showtime(&self, showtime_id: ShowtimeId) -> AppResult<Showtime> {
        let current = self.find(showtime_id)?;
        if current.is_scheduled() {
            return Err(AppError::invalid_state(format!(
                "Showtime {showtime_id} must be canceled before removal"
            )));
        }
        let inventory = self.registry.get(showtime_id)?;
        if inventory.sold_count().await > 0 {
            return Err(AppError::invalid_state(format!(
                "Showtime {showtime_id} still has sold seats awaiting refunds"
            )));
        }

        self.showtimes.remove(&showtime_id);
        self.registry.remove(showtime_id);
        info!(showtime = %showtime_id, "Showtime removed");
        Ok(current)
    }

    /// Look up a showtime by id.
    pub fn find(&self, showtime_id: ShowtimeId) -> AppResult<Showtime> {
        self.showtimes
            .get(&showtime_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::event_not_found(showtime_id))
    }

    /// List showtimes matching the filter, ordered by start time.
    pub fn list(&self, filter: &ShowtimeFilter) -> Vec<Showtime> {
        let mut results: Vec<Showtime> = self
            .showtimes
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        results.sort_by_key(|s| (s.window.start, s.id));
        results
    }

    /// Occupancy counters for one showtime.
    pub async fn occupancy(&self, showtime_id: ShowtimeId) -> AppResult<Occupancy> {
        Ok(self.registry.get(showtime_id)?.occupancy().await)
    }

    /// Mean occupancy rate across scheduled showtimes.
    pub async fn average_occupancy_rate(&self) -> f64 {
        let scheduled = self.list(&ShowtimeFilter {
            status: Some(ShowtimeStatus::Scheduled),
            ..ShowtimeFilter::default()
        });
        if scheduled.is_empty() {
            return 0.0;
        }
        let mut sum = 0.0;
        for showtime in &scheduled {
            if let Ok(occupancy) = self.occupancy(showtime.id).await {
                sum += occupancy.rate();
            }
        }
        sum / scheduled.len() as f64
    }

    /// The `limit` scheduled showtimes with the highest occupancy.
    pub async fn top_performing(&self, limit: usize) -> Vec<(Showtime, Occupancy)> {
        let scheduled = self.list(&ShowtimeFilter {
            status: Some(ShowtimeStatus::Scheduled),
            ..ShowtimeFilter::default()
        });
        let mut ranked = Vec::with_capacity(scheduled.len());
        for showtime in scheduled {
            if let Ok(occupancy) = self.occupancy(showtime.id).await {
                ranked.push((showtime, occupancy));
            }
        }
        ranked.sort_by(|a, b| {
            b.1.rate()
                .partial_cmp(&a.1.rate())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }

    /// Schedule a batch of showtimes, returning one result per draft.
    pub async fn bulk_create(&self, drafts: Vec<ShowtimeDraft>) -> Vec<AppResult<Showtime>> {
        let total = drafts.len();
        let mut results = Vec::with_capacity(total);
        for draft in drafts {
            results.push(self.create_showtime(draft).await);
        }
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        info!(succeeded, total, "Bulk showtime creation finished");
        results
    }

    /// Copy every scheduled showtime of `source_day` to `target_day`,
    /// shifting windows by whole days and resetting availability.
    pub async fn copy_schedule(
        &self,
        source_day: NaiveDate,
        target_day: NaiveDate,
    ) -> AppResult<Vec<AppResult<Showtime>>> {
        let day_start = source_day.and_time(NaiveTime::MIN).and_utc();
        let day_end = day_start + Duration::days(1);
        let offset = target_day.signed_duration_since(source_day);

        let sources = self.list(&ShowtimeFilter {
            status: Some(ShowtimeStatus::Scheduled),
            starts_from: Some(day_start),
            starts_before: Some(day_end),
            ..ShowtimeFilter::default()
        });

        let mut drafts = Vec::with_capacity(sources.len());
        for source in sources {
            let window =
                TimeWindow::new(source.window.start + offset, source.window.end + offset)?;
            drafts.push(ShowtimeDraft {
                auditorium_id: source.auditorium_id,
                window,
                format: source.format,
                base_price: source.base_price,
                seats_total: Some(source.seats_total),
                hold_ttl_seconds: source.hold_ttl_seconds,
            });
        }
        Ok(self.bulk_create(drafts).await)
    }
}

#[async_trait]
impl ShowtimeDirectory for ScheduleService {
    async fn resolve(&self, showtime_id: ShowtimeId) -> AppResult<ShowtimeSummary> {
        self.find(showtime_id).map(|s| s.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::ErrorKind;
    use boxoffice_core::types::seat_code::SeatId;
    use chrono::{DateTime, Utc};

    fn setup() -> (Arc<AuditoriumCatalog>, Arc<InventoryRegistry>, ScheduleService) {
        let catalog = Arc::new(AuditoriumCatalog::new());
        catalog
            .register(
                "Theater 1",
                50,
                "Standard",
                vec![ScreenFormat::TwoD, ScreenFormat::Imax],
            )
            .expect("register");
        catalog
            .register("Theater 2", 80, "Standard", vec![ScreenFormat::TwoD])
            .expect("register");
        let registry = Arc::new(InventoryRegistry::new());
        let service = ScheduleService::new(
            &SchedulingConfig::default(),
            Arc::clone(&catalog),
            Arc::clone(&registry),
        );
        (catalog, registry, service)
    }

    fn day_after_tomorrow_at(hour: u32, minute: u32) -> DateTime<Utc> {
        (Utc::now() + Duration::days(2))
            .date_naive()
            .and_hms_opt(hour, minute, 0)
            .expect("valid time")
            .and_utc()
    }

    fn window(sh: u32, sm: u32, eh: u32, em: u32) -> TimeWindow {
        TimeWindow::new(day_after_tomorrow_at(sh, sm), day_after_tomorrow_at(eh, em))
            .expect("valid window")
    }

    fn draft(auditorium: u64, window: TimeWindow) -> ShowtimeDraft {
        ShowtimeDraft {
            auditorium_id: AuditoriumId::new(auditorium),
            window,
            format: ScreenFormat::TwoD,
            base_price: 12.0,
            seats_total: None,
            hold_ttl_seconds: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_window_inside_buffer() {
        let (_, _, service) = setup();
        service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("first showtime");

        let err = service
            .create_showtime(draft(1, window(12, 15, 13, 0)))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::EventConflict);

        service
            .create_showtime(draft(1, window(12, 30, 13, 0)))
            .await
            .expect("showtime past the buffer");
    }

    #[tokio::test]
    async fn test_conflict_is_per_auditorium() {
        let (_, _, service) = setup();
        service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("first showtime");
        service
            .create_showtime(draft(2, window(10, 0, 12, 0)))
            .await
            .expect("same window, other room");
    }

    #[tokio::test]
    async fn test_create_enforces_capacity_and_format() {
        let (_, _, service) = setup();

        let mut oversize = draft(1, window(10, 0, 12, 0));
        oversize.seats_total = Some(51);
        let err = service.create_showtime(oversize).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::CapacityExceeded);

        let mut wrong_format = draft(2, window(10, 0, 12, 0));
        wrong_format.format = ScreenFormat::Imax;
        let err = service.create_showtime(wrong_format).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_create_rejects_past_start() {
        let (_, _, service) = setup();
        let past = TimeWindow::new(
            Utc::now() - Duration::hours(3),
            Utc::now() - Duration::hours(1),
        )
        .expect("window");
        let err = service.create_showtime(draft(1, past)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_create_registers_inventory() {
        let (_, registry, service) = setup();
        let showtime = service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("showtime");
        let occupancy = registry
            .get(showtime.id)
            .expect("inventory")
            .occupancy()
            .await;
        assert_eq!(occupancy.total, 50);
        assert_eq!(occupancy.available, 50);
    }

    #[tokio::test]
    async fn test_cancel_frees_the_window() {
        let (_, _, service) = setup();
        let showtime = service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("showtime");

        let canceled = service
            .cancel_showtime(showtime.id, "projector failure")
            .await
            .expect("cancel");
        assert_eq!(canceled.showtime.status, ShowtimeStatus::Canceled);
        assert!(canceled.affected_orders.is_empty());

        service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("window reusable after cancel");

        // A second cancel is an invalid transition.
        let err = service
            .cancel_showtime(showtime.id, "again")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidState);
    }

    #[tokio::test]
    async fn test_cancel_reports_active_orders() {
        let (_, registry, service) = setup();
        let showtime = service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("showtime");

        let inventory = registry.get(showtime.id).expect("inventory");
        let seat: SeatId = "A01".parse().expect("seat");
        inventory
            .hold(&[seat], OrderId::new(77), Duration::seconds(300))
            .await
            .expect("hold");

        let canceled = service
            .cancel_showtime(showtime.id, "low demand")
            .await
            .expect("cancel");
        assert_eq!(canceled.affected_orders, vec![OrderId::new(77)]);
    }

    #[tokio::test]
    async fn test_reschedule_excludes_itself_from_conflicts() {
        let (_, _, service) = setup();
        let showtime = service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("showtime");

        let moved = service
            .reschedule(showtime.id, window(10, 30, 12, 30), None)
            .await
            .expect("overlapping only itself");
        assert_eq!(moved.window, window(10, 30, 12, 30));
    }

    #[tokio::test]
    async fn test_reschedule_conflicts_with_neighbors() {
        let (_, _, service) = setup();
        service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("first");
        let second = service
            .create_showtime(draft(1, window(14, 0, 16, 0)))
            .await
            .expect("second");

        let err = service
            .reschedule(second.id, window(12, 15, 13, 30), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::EventConflict);
    }

    #[tokio::test]
    async fn test_reschedule_blocked_once_seats_are_held() {
        let (_, registry, service) = setup();
        let showtime = service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("showtime");

        let seat: SeatId = "A01".parse().expect("seat");
        registry
            .get(showtime.id)
            .expect("inventory")
            .hold(&[seat], OrderId::new(1), Duration::seconds(300))
            .await
            .expect("hold");

        let err = service
            .reschedule(showtime.id, window(15, 0, 17, 0), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidState);

        // Pricing updates remain legal.
        let updated = service
            .update_pricing(showtime.id, Some(14.5), None)
            .await
            .expect("pricing update");
        assert!((updated.base_price - 14.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_remove_requires_cancellation_first() {
        let (_, registry, service) = setup();
        let showtime = service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("showtime");

        let err = service.remove_showtime(showtime.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidState);

        service
            .cancel_showtime(showtime.id, "closing early")
            .await
            .expect("cancel");
        service.remove_showtime(showtime.id).await.expect("remove");
        assert!(registry.get(showtime.id).is_err());
        assert!(service.find(showtime.id).is_err());
    }

    #[tokio::test]
    async fn test_copy_schedule_shifts_windows_by_days() {
        let (_, _, service) = setup();
        service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("source showtime");

        let source_day = day_after_tomorrow_at(0, 0).date_naive();
        let target_day = source_day + Duration::days(1);
        let results = service
            .copy_schedule(source_day, target_day)
            .await
            .expect("copy");
        assert_eq!(results.len(), 1);
        let copied = results[0].as_ref().expect("copied showtime");
        assert_eq!(
            copied.window.start,
            day_after_tomorrow_at(10, 0) + Duration::days(1)
        );
    }

    #[tokio::test]
    async fn test_directory_resolves_summaries() {
        let (_, _, service) = setup();
        let showtime = service
            .create_showtime(draft(1, window(10, 0, 12, 0)))
            .await
            .expect("showtime");

        let summary = service.resolve(showtime.id).await.expect("summary");
        assert!(summary.is_scheduled);
        assert_eq!(summary.auditorium_id, AuditoriumId::new(1));

        let err = service.resolve(ShowtimeId::new(404)).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::EventNotFound);
    }
}
