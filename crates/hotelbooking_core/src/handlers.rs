// File: crates/hotelbooking_core/src/handlers.rs
use crate::logic::{
    BookingError, BookingManager, ZonedClock, ALL_ROOMS_OCCUPIED_MESSAGE, INVALID_RANGE_MESSAGE,
};
use crate::models::{
    AvailableRoomResponse, Booking, CreateBookingRequest, Customer, DateRangeQuery,
    OccupiedDatesResponse, Room, NO_ROOM_AVAILABLE,
};
use crate::repository::{InMemoryRepository, Repository, RepositoryError};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use hotelbooking_common::{conflict, not_found, HotelBookingError};
use hotelbooking_config::AppConfig;
use std::sync::Arc;
use tracing::{info, warn};

impl From<BookingError> for HotelBookingError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidRange => {
                HotelBookingError::InternalError(INVALID_RANGE_MESSAGE.to_string())
            }
            BookingError::Repository(inner) => inner.into(),
        }
    }
}

impl From<RepositoryError> for HotelBookingError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(id) => {
                HotelBookingError::ConflictError(format!("Entity with id {} already exists", id))
            }
            RepositoryError::Storage(message) => HotelBookingError::DatabaseError(message),
        }
    }
}

// Shared state for the booking routes
#[derive(Clone)]
pub struct BookingState {
    pub manager: BookingManager,
    pub customers: Arc<dyn Repository<Customer>>,
}

impl BookingState {
    pub fn new(manager: BookingManager, customers: Arc<dyn Repository<Customer>>) -> Self {
        Self { manager, customers }
    }

    /// State backed by in-memory repositories, seeded with the rooms and
    /// customers listed in the configuration.
    pub fn in_memory(config: &AppConfig) -> Self {
        let rooms = InMemoryRepository::with_items(config.rooms.iter().cloned().map(Room::from));
        let customers =
            InMemoryRepository::with_items(config.customers.iter().cloned().map(Customer::from));
        let bookings = InMemoryRepository::<Booking>::new();

        let manager = BookingManager::new(Arc::new(bookings), Arc::new(rooms))
            .with_clock(Arc::new(ZonedClock::from_config(&config.booking)));

        Self::new(manager, Arc::new(customers))
    }
}

/// Handler to create a booking on the first free room.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created"),
        (status = 409, description = "The booking could not be created. All rooms are occupied."),
        (status = 500, description = "The start date cannot be in the past or later than the end date.")
    ),
    tag = "Bookings"
))]
pub async fn create_booking_handler(
    State(state): State<Arc<BookingState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<StatusCode, HotelBookingError> {
    let booking = Booking::from(payload);
    if state.manager.create_booking(booking).await? {
        Ok(StatusCode::CREATED)
    } else {
        Err(conflict(ALL_ROOMS_OCCUPIED_MESSAGE))
    }
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings",
    responses((status = 200, description = "All bookings", body = [Booking])),
    tag = "Bookings"
))]
pub async fn list_bookings_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Vec<Booking>>, HotelBookingError> {
    let bookings = state.manager.bookings().get_all().await?;
    Ok(Json(bookings))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings/{id}",
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking", body = Booking),
        (status = 404, description = "No booking with this id")
    ),
    tag = "Bookings"
))]
pub async fn get_booking_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<i64>,
) -> Result<Json<Booking>, HotelBookingError> {
    state
        .manager
        .bookings()
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(format!("booking {}", id)))
}

/// Handler to look up the room a booking over the range would get.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings/available-room",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "First free room, -1 if none", body = AvailableRoomResponse),
        (status = 500, description = "Invalid date range")
    ),
    tag = "Bookings"
))]
pub async fn available_room_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<AvailableRoomResponse>, HotelBookingError> {
    let room_id = state
        .manager
        .find_available_room(query.start_date, query.end_date)
        .await?
        .unwrap_or(NO_ROOM_AVAILABLE);
    Ok(Json(AvailableRoomResponse { room_id }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings/occupied-dates",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Dates on which every room is booked", body = OccupiedDatesResponse),
        (status = 500, description = "Invalid date range")
    ),
    tag = "Bookings"
))]
pub async fn occupied_dates_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<OccupiedDatesResponse>, HotelBookingError> {
    let dates = state
        .manager
        .get_fully_occupied_dates(query.start_date, query.end_date)
        .await?;
    Ok(Json(OccupiedDatesResponse { dates }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/rooms",
    responses((status = 200, description = "All rooms", body = [Room])),
    tag = "Rooms"
))]
pub async fn list_rooms_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Vec<Room>>, HotelBookingError> {
    Ok(Json(state.manager.rooms().get_all().await?))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/rooms/{id}",
    params(("id" = i64, Path, description = "Room id")),
    responses(
        (status = 200, description = "The room", body = Room),
        (status = 404, description = "No room with this id")
    ),
    tag = "Rooms"
))]
pub async fn get_room_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<i64>,
) -> Result<Json<Room>, HotelBookingError> {
    state
        .manager
        .rooms()
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(format!("room {}", id)))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/rooms",
    request_body = Room,
    responses(
        (status = 201, description = "Room added", body = Room),
        (status = 409, description = "A room with this id exists")
    ),
    tag = "Rooms"
))]
pub async fn create_room_handler(
    State(state): State<Arc<BookingState>>,
    Json(room): Json<Room>,
) -> Result<impl IntoResponse, HotelBookingError> {
    let room = state.manager.rooms().add(room).await.inspect_err(|e| {
        warn!("Failed to add room: {}", e);
    })?;
    info!(room_id = room.id, "room added");
    Ok((StatusCode::CREATED, Json(room)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/customers",
    responses((status = 200, description = "All customers", body = [Customer])),
    tag = "Customers"
))]
pub async fn list_customers_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Vec<Customer>>, HotelBookingError> {
    Ok(Json(state.customers.get_all().await?))
}

pub async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotelbooking_config::{BookingConfig, CustomerSeed, RoomSeed};

    #[tokio::test]
    async fn test_in_memory_state_is_seeded_from_config() {
        let config = AppConfig {
            booking: BookingConfig {
                time_zone: Some("America/New_York".to_string()),
            },
            rooms: vec![
                RoomSeed {
                    id: 2,
                    description: "B".to_string(),
                },
                RoomSeed {
                    id: 1,
                    description: "A".to_string(),
                },
            ],
            customers: vec![CustomerSeed {
                id: 1,
                name: "John Smith".to_string(),
                email: "john@example.com".to_string(),
            }],
            ..AppConfig::default()
        };

        let state = BookingState::in_memory(&config);

        let rooms = state.manager.rooms().get_all().await.unwrap();
        assert_eq!(rooms, vec![Room::new(2, "B"), Room::new(1, "A")]);
        let customers = state.customers.get_all().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "John Smith");
        assert!(state.manager.bookings().get_all().await.unwrap().is_empty());
    }
}
