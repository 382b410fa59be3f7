//! Shared fixtures for the integration suite.

use chrono::{DateTime, Duration, Utc};

use boxoffice_core::types::id::AuditoriumId;
use boxoffice_core::types::seat_code::SeatId;
use boxoffice_core::types::window::TimeWindow;
use boxoffice_entity::showtime::{ScreenFormat, Showtime, ShowtimeDraft};
use marquee_boxoffice::{AppConfig, Engine};

/// An engine with default configuration and no background tasks.
pub fn engine() -> Engine {
    Engine::new(AppConfig::default())
}

pub fn seat(code: &str) -> SeatId {
    code.parse().expect("seat code")
}

/// A wall-clock instant one week out, at the given local-UTC time.
pub fn next_week_at(hour: u32, minute: u32) -> DateTime<Utc> {
    (Utc::now() + Duration::days(7))
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .expect("valid time")
        .and_utc()
}

pub fn window(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeWindow {
    TimeWindow::new(next_week_at(start_h, start_m), next_week_at(end_h, end_m))
        .expect("valid window")
}

/// Register a standard 2D/IMAX theater of the given capacity.
pub fn register_theater(engine: &Engine, capacity: u32) -> AuditoriumId {
    engine
        .catalog()
        .register(
            "Theater 1",
            capacity,
            "Standard",
            vec![ScreenFormat::TwoD, ScreenFormat::Imax],
        )
        .expect("register auditorium")
        .id
}

/// Schedule a 2D showtime at $12 in the given window.
pub async fn schedule_showtime(
    engine: &Engine,
    auditorium_id: AuditoriumId,
    window: TimeWindow,
    hold_ttl_seconds: Option<u64>,
) -> Showtime {
    engine
        .schedule()
        .create_showtime(ShowtimeDraft {
            auditorium_id,
            window,
            format: ScreenFormat::TwoD,
            base_price: 12.0,
            seats_total: None,
            hold_ttl_seconds,
        })
        .await
        .expect("schedule showtime")
}
