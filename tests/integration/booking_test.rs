//! End-to-end booking flows through the assembled engine.

use boxoffice_entity::order::OrderPaymentState;
use boxoffice_entity::ticket::TicketStatus;

use crate::helpers::{engine, register_theater, schedule_showtime, seat, window};

#[tokio::test]
async fn test_full_booking_round_trip() {
    let engine = engine();
    let auditorium = register_theater(&engine, 50);
    let showtime = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), None).await;

    // Hold two seats; the order is pending and priced.
    let order = engine
        .booking()
        .place_order(showtime.id, vec![seat("A01"), seat("A02")], 0.0)
        .await
        .expect("place order");
    assert_eq!(order.payment_state, OrderPaymentState::Pending);
    assert!(order.pricing.total > 0.0);

    let occupancy = engine.schedule().occupancy(showtime.id).await.expect("occupancy");
    assert_eq!(occupancy.held, 2);
    assert!((occupancy.rate() - 2.0 / 50.0).abs() < 1e-9);

    // Payment settles out of band; confirmation issues tickets.
    let (paid, tickets) = engine
        .booking()
        .confirm_order(order.id)
        .await
        .expect("confirm order");
    assert_eq!(paid.payment_state, OrderPaymentState::Paid);
    assert_eq!(tickets.len(), 2);
    for ticket in &tickets {
        assert_eq!(ticket.status, TicketStatus::Valid);
        assert!(engine.booking().validate_ticket(&ticket.code));
        assert_eq!(ticket.showtime_id, showtime.id);
    }

    // Refund flips every ticket and returns the seats.
    let refunded = engine
        .booking()
        .refund_order(order.id, "schedule change")
        .await
        .expect("refund order");
    assert_eq!(refunded.payment_state, OrderPaymentState::Refunded);
    for ticket in engine.booking().tickets_for_order(order.id) {
        assert_eq!(ticket.status, TicketStatus::Canceled);
        assert!(!engine.booking().validate_ticket(&ticket.code));
    }
    let occupancy = engine.schedule().occupancy(showtime.id).await.expect("occupancy");
    assert_eq!(occupancy.available, 50);
}

#[tokio::test]
async fn test_exchange_moves_a_pending_order_between_showtimes() {
    let engine = engine();
    let auditorium = register_theater(&engine, 50);
    let matinee = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), None).await;
    let evening = schedule_showtime(&engine, auditorium, window(19, 0, 21, 0), None).await;

    let order = engine
        .booking()
        .place_order(matinee.id, vec![seat("A01")], 0.0)
        .await
        .expect("place order");

    let moved = engine
        .booking()
        .exchange_order(order.id, evening.id, vec![seat("B02")])
        .await
        .expect("exchange");
    assert_eq!(moved.showtime_id, evening.id);

    let matinee_occupancy = engine.schedule().occupancy(matinee.id).await.expect("occupancy");
    assert_eq!(matinee_occupancy.available, 50);
    let evening_occupancy = engine.schedule().occupancy(evening.id).await.expect("occupancy");
    assert_eq!(evening_occupancy.held, 1);
}

#[tokio::test]
async fn test_failed_exchange_keeps_the_original_booking() {
    let engine = engine();
    let auditorium = register_theater(&engine, 50);
    let matinee = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), None).await;
    let evening = schedule_showtime(&engine, auditorium, window(19, 0, 21, 0), None).await;

    // A rival order owns the target seat outright.
    let rival = engine
        .booking()
        .place_order(evening.id, vec![seat("B02")], 0.0)
        .await
        .expect("rival order");
    engine
        .booking()
        .confirm_order(rival.id)
        .await
        .expect("rival confirm");

    let order = engine
        .booking()
        .place_order(matinee.id, vec![seat("A01")], 0.0)
        .await
        .expect("place order");

    let err = engine
        .booking()
        .exchange_order(order.id, evening.id, vec![seat("B02")])
        .await
        .unwrap_err();
    assert_eq!(err.kind, boxoffice_core::ErrorKind::SeatUnavailable);

    // The original hold is untouched.
    let unchanged = engine.booking().order(order.id).expect("order");
    assert_eq!(unchanged.showtime_id, matinee.id);
    assert_eq!(unchanged.seat_ids, vec![seat("A01")]);
    let occupancy = engine.schedule().occupancy(matinee.id).await.expect("occupancy");
    assert_eq!(occupancy.held, 1);
}

#[tokio::test]
async fn test_canceled_showtime_reports_orders_for_refund() {
    let engine = engine();
    let auditorium = register_theater(&engine, 50);
    let showtime = schedule_showtime(&engine, auditorium, window(10, 0, 12, 0), None).await;

    let order = engine
        .booking()
        .place_order(showtime.id, vec![seat("A01")], 0.0)
        .await
        .expect("place order");
    engine.booking().confirm_order(order.id).await.expect("confirm");

    let canceled = engine
        .schedule()
        .cancel_showtime(showtime.id, "print damaged")
        .await
        .expect("cancel showtime");
    assert_eq!(canceled.affected_orders, vec![order.id]);

    // Removal is refused until the sold seats are refunded.
    let err = engine.schedule().remove_showtime(showtime.id).await.unwrap_err();
    assert_eq!(err.kind, boxoffice_core::ErrorKind::InvalidState);

    engine
        .booking()
        .refund_order(order.id, "showtime canceled")
        .await
        .expect("refund");
    engine
        .schedule()
        .remove_showtime(showtime.id)
        .await
        .expect("remove showtime");
    assert!(engine.registry().get(showtime.id).is_err());
}
