//! Test fixtures for the booking integration tests
//!
//! Builders for a config, a booking manager and a router state, all with
//! "today" pinned so date ranges stay deterministic.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use hotelbooking_config::{AppConfig, CustomerSeed, RoomSeed};
use hotelbooking_core::{
    Booking, BookingManager, BookingState, Customer, FixedClock, InMemoryRepository, Room,
};
use std::sync::Arc;

/// The date every fixture treats as today
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
}

/// `today()` shifted by `offset` days
pub fn day(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

/// Creates a config with two rooms and two customers
pub fn create_mock_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        rooms: vec![
            RoomSeed {
                id: 1,
                description: "A".to_string(),
            },
            RoomSeed {
                id: 2,
                description: "B".to_string(),
            },
        ],
        customers: vec![
            CustomerSeed {
                id: 1,
                name: "John Smith".to_string(),
                email: "john@example.com".to_string(),
            },
            CustomerSeed {
                id: 2,
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
            },
        ],
        ..AppConfig::default()
    })
}

/// Creates a manager over in-memory repositories with a fixed clock
pub fn create_manager(rooms: Vec<Room>, bookings: Vec<Booking>) -> BookingManager {
    BookingManager::new(
        Arc::new(InMemoryRepository::with_items(bookings)),
        Arc::new(InMemoryRepository::with_items(rooms)),
    )
    .with_clock(Arc::new(FixedClock(today())))
}

/// Creates router state seeded from the mock config plus `bookings`
pub fn create_state(bookings: Vec<Booking>) -> Arc<BookingState> {
    let config = create_mock_config();
    let rooms = config.rooms.iter().cloned().map(Room::from).collect();
    let customers: Vec<Customer> = config.customers.iter().cloned().map(Customer::from).collect();
    let manager = create_manager(rooms, bookings);
    Arc::new(BookingState::new(
        manager,
        Arc::new(InMemoryRepository::with_items(customers)),
    ))
}

/// Both mock rooms booked over `[start, end]`
pub fn fully_booked(start: NaiveDate, end: NaiveDate) -> Vec<Booking> {
    vec![Booking::active(1, start, end), Booking::active(2, start, end)]
}
