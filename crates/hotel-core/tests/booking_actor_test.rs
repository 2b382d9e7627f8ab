//! Real booking actor, mocked room actor: the create pipeline (interval
//! validation, room lookup, pricing, overlap constraint) without the room actor.

use chrono::{DateTime, TimeZone, Utc};
use hotel_core::booking_actor::BookingError;
use hotel_core::clients::{BookingClient, RoomClient};
use hotel_core::clock::{ManualClock, SharedClock};
use hotel_core::model::{BookingCreate, Room, RoomId, RoomStatus, UserId};
use resource_actor::mock::MockClient;
use resource_actor::ActorClient;
use rust_decimal::Decimal;
use std::sync::Arc;

fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
}

fn room(status: RoomStatus) -> Room {
    Room {
        id: RoomId(1),
        number: "101".into(),
        room_type: "suite".into(),
        floor: 1,
        description: String::new(),
        capacity: 2,
        price_per_night: Decimal::new(8950, 2),
        status,
    }
}

fn stay(start: DateTime<Utc>, end: DateTime<Utc>) -> BookingCreate {
    BookingCreate {
        user_id: UserId(1),
        room_id: RoomId(1),
        start,
        end,
    }
}

fn spawn_bookings(room_mock: &MockClient<Room>) -> BookingClient {
    let clock: SharedClock = Arc::new(ManualClock::new(jan(1)));
    let rooms = RoomClient::new(room_mock.client());
    let (actor, client) = hotel_core::booking_actor::new(16);
    tokio::spawn(actor.run((rooms, clock)));
    BookingClient::new(client)
}

#[tokio::test]
async fn test_booking_priced_from_room_with_started_days_rounded_up() {
    let mut room_mock = MockClient::<Room>::new();
    room_mock
        .expect_get(RoomId(1))
        .return_ok(Some(room(RoomStatus::Available)));
    let bookings = spawn_bookings(&room_mock);

    // two nights and one hour bills three nights
    let id = bookings
        .create_booking(stay(jan(10), jan(12) + chrono::Duration::hours(1)))
        .await
        .unwrap();

    let booking = bookings.get(id).await.unwrap().unwrap();
    assert_eq!(booking.total_price, Decimal::new(26850, 2));
    room_mock.verify();
}

#[tokio::test]
async fn test_booking_rejected_when_room_missing_or_unavailable() {
    let mut room_mock = MockClient::<Room>::new();
    room_mock.expect_get(RoomId(1)).return_ok(None);
    room_mock
        .expect_get(RoomId(1))
        .return_ok(Some(room(RoomStatus::Occupied)));
    let bookings = spawn_bookings(&room_mock);

    assert_eq!(
        bookings
            .create_booking(stay(jan(10), jan(12)))
            .await
            .unwrap_err(),
        BookingError::RoomNotFound(RoomId(1))
    );
    assert_eq!(
        bookings
            .create_booking(stay(jan(10), jan(12)))
            .await
            .unwrap_err(),
        BookingError::RoomUnavailable {
            room: RoomId(1),
            status: RoomStatus::Occupied,
        }
    );
    assert!(bookings.list_bookings().await.unwrap().is_empty());
    room_mock.verify();
}

#[tokio::test]
async fn test_overlap_checked_after_room_lookup() {
    let mut room_mock = MockClient::<Room>::new();
    for _ in 0..3 {
        room_mock
            .expect_get(RoomId(1))
            .return_ok(Some(room(RoomStatus::Available)));
    }
    let bookings = spawn_bookings(&room_mock);

    bookings
        .create_booking(stay(jan(10), jan(15)))
        .await
        .unwrap();
    assert_eq!(
        bookings
            .create_booking(stay(jan(12), jan(13)))
            .await
            .unwrap_err(),
        BookingError::Overlap(RoomId(1))
    );
    bookings
        .create_booking(stay(jan(15), jan(16)))
        .await
        .unwrap();

    room_mock.verify();
}

#[tokio::test]
async fn test_invalid_interval_never_reaches_room_actor() {
    let room_mock = MockClient::<Room>::new();
    let bookings = spawn_bookings(&room_mock);

    let err = bookings
        .create_booking(stay(jan(12), jan(12)))
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::ValidationError(_)));
    room_mock.verify();
}
