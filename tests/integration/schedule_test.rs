//! Scheduling behavior through the assembled engine.

use boxoffice_core::ErrorKind;
use boxoffice_entity::showtime::{ScreenFormat, ShowtimeDraft};
use boxoffice_scheduling::ShowtimeFilter;

use crate::helpers::{engine, register_theater, schedule_showtime, seat, window};

#[tokio::test]
async fn test_turnaround_buffer_is_enforced() {
    let engine = engine();
    let auditorium = register_theater(&engine, 50);
    schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), None).await;

    // 12:15 start is inside the 30-minute turnaround after 12:00.
    let err = engine
        .schedule()
        .create_showtime(ShowtimeDraft {
            auditorium_id: auditorium,
            window: window(12, 15, 13, 0),
            format: ScreenFormat::TwoD,
            base_price: 12.0,
            seats_total: None,
            hold_ttl_seconds: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EventConflict);

    // 12:30 clears the buffer exactly.
    schedule_showtime(&engine, auditorium, window(12, 30, 13, 30), None).await;
}

#[tokio::test]
async fn test_capacity_bounds_event_creation() {
    let engine = engine();
    let auditorium = register_theater(&engine, 30);

    let err = engine
        .schedule()
        .create_showtime(ShowtimeDraft {
            auditorium_id: auditorium,
            window: window(10, 0, 12, 0),
            format: ScreenFormat::TwoD,
            base_price: 12.0,
            seats_total: Some(31),
            hold_ttl_seconds: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::CapacityExceeded);
}

#[tokio::test]
async fn test_listing_and_occupancy_stats() {
    let engine = engine();
    let auditorium = register_theater(&engine, 20);
    let first = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), None).await;
    schedule_showtime(&engine, auditorium, window(14, 0, 16, 0), None).await;

    // Fill half of the first showtime.
    engine
        .booking()
        .place_order(
            first.id,
            (1..=10)
                .map(|n| seat(&format!("A{n:02}")))
                .collect::<Vec<_>>(),
            0.0,
        )
        .await
        .expect("place order");

    let listed = engine.schedule().list(&ShowtimeFilter::default());
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);

    let average = engine.schedule().average_occupancy_rate().await;
    assert!((average - 0.25).abs() < 1e-9);

    let top = engine.schedule().top_performing(1).await;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].0.id, first.id);
    assert!((top[0].1.rate() - 0.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_seat_map_snapshot_shape() {
    let engine = engine();
    let auditorium = register_theater(&engine, 25);
    let showtime = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), None).await;

    let snapshot = engine
        .booking()
        .seat_map(showtime.id)
        .await
        .expect("snapshot");
    assert_eq!(snapshot.seat_count(), 25);
    assert_eq!(snapshot.rows.len(), 3);
    assert_eq!(snapshot.rows[0].row, 'A');
    assert_eq!(snapshot.rows[2].seats.len(), 5);
}
