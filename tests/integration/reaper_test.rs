//! Hold expiry and reaper behavior against the real clock.

use std::sync::Arc;
use std::time::Duration;

use boxoffice_worker::HoldReaperJob;
use marquee_boxoffice::{AppConfig, Engine};

use crate::helpers::{engine, register_theater, schedule_showtime, seat, window};

#[tokio::test]
async fn test_expired_hold_yields_to_competing_order_without_a_sweep() {
    let engine = engine();
    let auditorium = register_theater(&engine, 20);
    // One-second holds via the per-showtime override.
    let showtime = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), Some(1)).await;

    engine
        .booking()
        .place_order(showtime.id, vec![seat("A01")], 0.0)
        .await
        .expect("first order");

    tokio::time::sleep(Duration::from_millis(1500)).await;

    // No sweep has run; the hold is lapsed, so the seat is takeable.
    engine
        .booking()
        .place_order(showtime.id, vec![seat("A01")], 0.0)
        .await
        .expect("competing order after expiry");
}

#[tokio::test]
async fn test_manual_reaper_pass_reclaims_lapsed_holds() {
    let engine = engine();
    let auditorium = register_theater(&engine, 20);
    let showtime = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), Some(1)).await;

    engine
        .booking()
        .place_order(showtime.id, vec![seat("A01"), seat("A02")], 0.0)
        .await
        .expect("order");

    tokio::time::sleep(Duration::from_millis(1500)).await;

    let reaper = HoldReaperJob::new(Arc::clone(engine.registry()));
    let report = reaper.run().await;
    assert_eq!(report.total(), 2);

    let occupancy = engine.schedule().occupancy(showtime.id).await.expect("occupancy");
    assert_eq!(occupancy.available, 20);
}

#[tokio::test]
async fn test_started_engine_reaps_in_the_background() {
    let mut config = AppConfig::default();
    config.worker.reaper_interval_seconds = 1;
    let mut engine = Engine::start(config).await.expect("engine start");

    let auditorium = register_theater(&engine, 20);
    let showtime = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), Some(1)).await;
    engine
        .booking()
        .place_order(showtime.id, vec![seat("A01")], 0.0)
        .await
        .expect("order");

    // Hold lapses after 1s; the background sweep fires every second.
    tokio::time::sleep(Duration::from_millis(3500)).await;

    let occupancy = engine.schedule().occupancy(showtime.id).await.expect("occupancy");
    assert_eq!(occupancy.available, 20);

    engine.shutdown().await.expect("shutdown");
}
