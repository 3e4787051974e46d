// --- File: crates/hotelbooking_core/src/models.rs ---
use chrono::NaiveDate;
use hotelbooking_config::{CustomerSeed, RoomSeed};
use serde::{Deserialize, Serialize};

/// Returned over HTTP in place of a room id when every room is taken.
pub const NO_ROOM_AVAILABLE: i64 = -1;

/// Anything stored behind a [`crate::repository::Repository`].
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Room {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub description: String,
}

impl Room {
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

impl From<RoomSeed> for Room {
    fn from(seed: RoomSeed) -> Self {
        Self::new(seed.id, seed.description)
    }
}

impl Entity for Room {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// A reservation of one room for an inclusive range of calendar days.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    #[serde(default)]
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-15"))]
    pub start_date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-17"))]
    pub end_date: NaiveDate,
    /// Cleared when a booking is cancelled; inactive bookings never block a room.
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub room_id: i64,
}

impl Booking {
    /// A not-yet-placed booking request. Room and active flag are set by
    /// [`crate::logic::BookingManager::create_booking`].
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, customer_id: i64) -> Self {
        Self {
            id: 0,
            start_date,
            end_date,
            is_active: false,
            customer_id,
            room_id: 0,
        }
    }

    /// An active booking already placed on `room_id`.
    pub fn active(room_id: i64, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            is_active: true,
            room_id,
            ..Self::new(start_date, end_date, 0)
        }
    }

    /// Inclusive overlap with `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl Entity for Booking {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Customer {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<CustomerSeed> for Customer {
    fn from(seed: CustomerSeed) -> Self {
        Self {
            id: seed.id,
            name: seed.name,
            email: seed.email,
        }
    }
}

impl Entity for Customer {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

// --- Request / response payloads ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-15"))]
    pub start_date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-17"))]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub customer_id: i64,
}

impl From<CreateBookingRequest> for Booking {
    fn from(request: CreateBookingRequest) -> Self {
        Booking::new(request.start_date, request.end_date, request.customer_id)
    }
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct DateRangeQuery {
    /// Start date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-05"))]
    pub start_date: NaiveDate,

    /// End date in YYYY-MM-DD format (inclusive)
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-05-24"))]
    pub end_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailableRoomResponse {
    /// Id of the first free room, or -1 when none is free.
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub room_id: i64,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OccupiedDatesResponse {
    pub dates: Vec<NaiveDate>,
}
