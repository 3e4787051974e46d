// File: crates/hotelbooking_core/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    AvailableRoomResponse, Booking, CreateBookingRequest, Customer, DateRangeQuery,
    OccupiedDatesResponse, Room,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_booking_handler,
        handlers::list_bookings_handler,
        handlers::get_booking_handler,
        handlers::available_room_handler,
        handlers::occupied_dates_handler,
        handlers::list_rooms_handler,
        handlers::get_room_handler,
        handlers::create_room_handler,
        handlers::list_customers_handler,
    ),
    components(schemas(
        Booking,
        Room,
        Customer,
        CreateBookingRequest,
        DateRangeQuery,
        AvailableRoomResponse,
        OccupiedDatesResponse,
    )),
    tags(
        (name = "Bookings", description = "Room availability and booking"),
        (name = "Rooms", description = "Room catalog"),
        (name = "Customers", description = "Customer catalog")
    )
)]
pub struct BookingApiDoc;
