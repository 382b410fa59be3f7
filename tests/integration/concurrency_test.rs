//! Contention behavior: one seat can never go to two orders.

use std::sync::Arc;

use crate::helpers::{engine, register_theater, schedule_showtime, seat, window};

#[tokio::test]
async fn test_one_seat_goes_to_exactly_one_of_many_racers() {
    let engine = Arc::new(engine());
    let auditorium = register_theater(&engine, 20);
    let showtime = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), None).await;
    let showtime_id = showtime.id;

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let engine = Arc::clone(&engine);
        tasks.push(tokio::spawn(async move {
            engine
                .booking()
                .place_order(showtime_id, vec![seat("A01")], 0.0)
                .await
        }));
    }

    let mut winners = 0usize;
    for task in tasks {
        if task.await.expect("task completes").is_ok() {
            winners += 1;
        }
    }
    assert_eq!(winners, 1);

    let occupancy = engine.schedule().occupancy(showtime.id).await.expect("occupancy");
    assert_eq!(occupancy.held, 1);
    assert_eq!(occupancy.available, 19);
}

#[tokio::test]
async fn test_different_showtimes_do_not_contend() {
    let engine = Arc::new(engine());
    let auditorium = register_theater(&engine, 20);

    let mut tasks = Vec::new();
    for hour in [9u32, 13, 17, 21] {
        let showtime =
            schedule_showtime(&engine, auditorium, window(hour, 0, hour + 2, 0), None).await;
        let showtime_id = showtime.id;
        let engine = Arc::clone(&engine);
        tasks.push(tokio::spawn(async move {
            engine
                .booking()
                .place_order(showtime_id, vec![seat("A01"), seat("A02")], 0.0)
                .await
        }));
    }

    for task in tasks {
        task.await.expect("task completes").expect("order placed");
    }
}
