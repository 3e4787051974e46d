// --- File: crates/hotelbooking_core/src/routes.rs ---

use crate::handlers::{
    available_room_handler, create_booking_handler, create_room_handler, get_booking_handler,
    get_room_handler, health_handler, list_bookings_handler, list_customers_handler,
    list_rooms_handler, occupied_dates_handler, BookingState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing the booking, room and customer routes.
pub fn routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/bookings",
            post(create_booking_handler).get(list_bookings_handler),
        )
        .route("/bookings/available-room", get(available_room_handler))
        .route("/bookings/occupied-dates", get(occupied_dates_handler))
        .route("/bookings/{id}", get(get_booking_handler))
        .route("/rooms", get(list_rooms_handler).post(create_room_handler))
        .route("/rooms/{id}", get(get_room_handler))
        .route("/customers", get(list_customers_handler))
        .with_state(state)
}
