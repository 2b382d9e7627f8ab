//! # Interval Conflict Detector
//!
//! Stays are half-open: a guest checking out on the 5th does not block a guest
//! checking in on the 5th. Two stays `[s1, e1)` and `[s2, e2)` conflict when
//!
//! - `s2` falls inside the first stay (`s1 <= s2 < e1`), or
//! - `e2` falls inside it (`s1 < e2 <= e1`), or
//! - the second stay covers the first (`s2 <= s1` and `e2 >= e1`).
//!
//! Only `confirmed` bookings take part; cancelled and completed ones never conflict.

use super::error::BookingError;
use crate::model::{Booking, RoomId};
use chrono::{DateTime, Utc};

const SECONDS_PER_NIGHT: i64 = 24 * 60 * 60;

pub fn overlaps(
    (s1, e1): (DateTime<Utc>, DateTime<Utc>),
    (s2, e2): (DateTime<Utc>, DateTime<Utc>),
) -> bool {
    (s1 <= s2 && s2 < e1) || (s1 < e2 && e2 <= e1) || (s2 <= s1 && e2 >= e1)
}

/// Whether `booking` blocks `room` for `[start, end)`.
pub fn conflicts(booking: &Booking, room: RoomId, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    booking.is_confirmed()
        && booking.room_id == room
        && overlaps((booking.start, booking.end), (start, end))
}

/// `true` when none of `bookings` blocks `room` for `[start, end)`.
pub fn is_available<'a>(
    bookings: impl IntoIterator<Item = &'a Booking>,
    room: RoomId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    !bookings
        .into_iter()
        .any(|booking| conflicts(booking, room, start, end))
}

/// Rejects empty or reversed intervals.
pub fn validate_interval(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), BookingError> {
    if start >= end {
        return Err(BookingError::ValidationError(
            "end date must be after start date".into(),
        ));
    }
    Ok(())
}

/// Rejects invalid intervals and stays that do not start strictly after `now`.
pub fn validate_stay(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), BookingError> {
    validate_interval(start, end)?;
    if start <= now {
        return Err(BookingError::ValidationError(
            "start date must be in the future".into(),
        ));
    }
    Ok(())
}

/// Nights billed for `[start, end)`: started days round up.
pub fn nights(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    (seconds + SECONDS_PER_NIGHT - 1).div_euclid(SECONDS_PER_NIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingId, BookingStatus, UserId};
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, 0, 0, 0).unwrap()
    }

    fn booking(id: u32, room: u32, start: DateTime<Utc>, end: DateTime<Utc>) -> Booking {
        Booking {
            id: BookingId(id),
            room_id: RoomId(room),
            user_id: UserId(1),
            start,
            end,
            total_price: Decimal::ZERO,
            status: BookingStatus::Confirmed,
            created_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_boundary_scenario() {
        let existing = [booking(1, 1, day(1), day(5))];

        assert!(!is_available(&existing, RoomId(1), day(4), day(6)));
        assert!(is_available(&existing, RoomId(1), day(5), day(7)));
    }

    #[test]
    fn test_containment_both_ways() {
        let existing = [booking(1, 1, day(10), day(20))];
        assert!(!is_available(&existing, RoomId(1), day(12), day(14)));
        assert!(!is_available(&existing, RoomId(1), day(8), day(22)));
        assert!(!is_available(&existing, RoomId(1), day(10), day(20)));
        assert!(is_available(&existing, RoomId(1), day(1), day(10)));
    }

    #[test]
    fn test_only_confirmed_bookings_on_same_room_conflict() {
        let mut cancelled = booking(1, 1, day(1), day(5));
        cancelled.status = BookingStatus::Cancelled;
        let mut completed = booking(2, 1, day(1), day(5));
        completed.status = BookingStatus::Completed;
        let other_room = booking(3, 2, day(1), day(5));

        let existing = [cancelled, completed, other_room];
        assert!(is_available(&existing, RoomId(1), day(2), day(3)));
    }

    #[test]
    fn test_nights_round_up() {
        assert_eq!(nights(day(1), day(5)), 4);
        assert_eq!(nights(day(1), day(1) + Duration::hours(1)), 1);
        assert_eq!(nights(day(1), day(2) + Duration::hours(1)), 2);
    }

    #[test]
    fn test_validate_stay() {
        let now = day(1);
        assert!(validate_stay(day(2), day(3), now).is_ok());
        assert!(validate_stay(day(3), day(3), now).is_err());
        assert!(validate_stay(day(4), day(3), now).is_err());
        assert!(validate_stay(day(1), day(3), now).is_err());
    }

    fn interval() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
        (0i64..24 * 60, 1i64..24 * 14).prop_map(|(offset, len)| {
            let start = day(1) + Duration::hours(offset);
            (start, start + Duration::hours(len))
        })
    }

    proptest! {
        #[test]
        fn prop_matches_half_open_overlap(a in interval(), b in interval()) {
            let expected = a.0 < b.1 && b.0 < a.1;
            prop_assert_eq!(overlaps(a, b), expected);
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn prop_admitted_bookings_never_overlap(
            requests in prop::collection::vec((0u32..3, interval()), 1..40)
        ) {
            let mut admitted: Vec<Booking> = Vec::new();
            for (n, (room, (start, end))) in requests.into_iter().enumerate() {
                if is_available(&admitted, RoomId(room), start, end) {
                    admitted.push(booking(n as u32, room, start, end));
                }
            }

            for (i, a) in admitted.iter().enumerate() {
                for b in &admitted[i + 1..] {
                    prop_assert!(
                        a.room_id != b.room_id || !overlaps((a.start, a.end), (b.start, b.end))
                    );
                }
            }
        }
    }
}
