#[cfg(test)]
mod tests {
    use crate::logic::{first_free_room, fully_occupied_dates};
    use crate::models::{Booking, Room};
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    }

    // Helper function to build a date range from offsets relative to the base date
    fn range(start_offset: i64, length: i64) -> (NaiveDate, NaiveDate) {
        let start = base_date() + Duration::days(start_offset);
        (start, start + Duration::days(length))
    }

    fn rooms(count: usize) -> Vec<Room> {
        (1..=count as i64)
            .map(|id| Room::new(id, format!("Room {}", id)))
            .collect()
    }

    // (room index, start offset, length, active)
    fn booking_strategy(room_count: usize) -> impl Strategy<Value = (usize, i64, i64, bool)> {
        (0..room_count, 0..40i64, 0..10i64, prop::bool::weighted(0.8))
    }

    fn to_bookings(raw: &[(usize, i64, i64, bool)]) -> Vec<Booking> {
        raw.iter()
            .map(|&(room_index, start_offset, length, active)| {
                let (start, end) = range(start_offset, length);
                let mut booking = Booking::active(room_index as i64 + 1, start, end);
                booking.is_active = active;
                booking
            })
            .collect()
    }

    proptest! {
        // Overlap does not depend on which range is the booking
        #[test]
        fn test_overlap_is_symmetric(
            a_start in 0..60i64,
            a_len in 0..15i64,
            b_start in 0..60i64,
            b_len in 0..15i64,
        ) {
            let (a_from, a_to) = range(a_start, a_len);
            let (b_from, b_to) = range(b_start, b_len);
            let a = Booking::active(1, a_from, a_to);
            let b = Booking::active(1, b_from, b_to);
            prop_assert_eq!(a.overlaps(b_from, b_to), b.overlaps(a_from, a_to));
        }

        // A returned room is really free; no room means every room conflicts
        #[test]
        fn test_first_free_room_is_free(
            room_count in 1..5usize,
            raw in prop::collection::vec(booking_strategy(4), 0..12),
            start_offset in 0..45i64,
            length in 0..8i64,
        ) {
            let rooms = rooms(room_count);
            let bookings = to_bookings(&raw);
            let (start, end) = range(start_offset, length);

            let conflicts = |room_id: i64| {
                bookings
                    .iter()
                    .any(|b| b.is_active && b.room_id == room_id && b.overlaps(start, end))
            };

            match first_free_room(&rooms, &bookings, start, end) {
                Some(room_id) => {
                    prop_assert!(!conflicts(room_id));
                    // Every room before it in retrieval order is taken
                    for room in rooms.iter().take_while(|r| r.id != room_id) {
                        prop_assert!(conflicts(room.id));
                    }
                }
                None => {
                    for room in &rooms {
                        prop_assert!(conflicts(room.id));
                    }
                }
            }
        }

        // Every reported date lies in the range and is taken in every room
        #[test]
        fn test_fully_occupied_dates_are_covered_by_every_room(
            room_count in 1..4usize,
            raw in prop::collection::vec(booking_strategy(3), 0..15),
            start_offset in 0..45i64,
            length in 0..10i64,
        ) {
            let rooms = rooms(room_count);
            let bookings = to_bookings(&raw);
            let (start, end) = range(start_offset, length);

            let dates = fully_occupied_dates(&rooms, &bookings, start, end);

            prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
            for date in &dates {
                prop_assert!(*date >= start && *date <= end);
                for room in &rooms {
                    prop_assert!(bookings
                        .iter()
                        .any(|b| b.is_active && b.room_id == room.id && b.covers(*date)));
                }
            }

            // And nothing was left out
            let expected = start
                .iter_days()
                .take_while(|d| *d <= end)
                .filter(|d| {
                    rooms.iter().all(|room| {
                        bookings
                            .iter()
                            .any(|b| b.is_active && b.room_id == room.id && b.covers(*d))
                    })
                })
                .count();
            prop_assert_eq!(dates.len(), expected);
        }
    }
}
