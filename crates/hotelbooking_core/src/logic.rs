// --- File: crates/hotelbooking_core/src/logic.rs ---
use crate::models::{Booking, Room};
use crate::repository::{Repository, RepositoryError};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use hotelbooking_config::BookingConfig;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

// --- Error Handling ---
use thiserror::Error;

pub const INVALID_RANGE_MESSAGE: &str =
    "The start date cannot be in the past or later than the end date.";
pub const ALL_ROOMS_OCCUPIED_MESSAGE: &str =
    "The booking could not be created. All rooms are occupied.";

#[derive(Error, Debug)]
pub enum BookingError {
    /// Start date not in the future, or after the end date.
    #[error("The start date cannot be in the past or later than the end date.")]
    InvalidRange,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

// --- Clock ---

/// Source of "today" for the future-start-date rule.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Today's date in a fixed time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedClock {
    time_zone: Tz,
}

impl ZonedClock {
    pub const DEFAULT_TIME_ZONE: Tz = Tz::Europe__Zurich;

    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Uses `booking.time_zone`; an unknown or missing zone falls back to
    /// [`Self::DEFAULT_TIME_ZONE`].
    pub fn from_config(config: &BookingConfig) -> Self {
        let time_zone = match config.time_zone.as_deref() {
            Some(name) => Tz::from_str(name).unwrap_or_else(|_| {
                warn!(time_zone = name, "unknown time zone, falling back to Europe/Zurich");
                Self::DEFAULT_TIME_ZONE
            }),
            None => Self::DEFAULT_TIME_ZONE,
        };
        Self::new(time_zone)
    }
}

impl Default for ZonedClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIME_ZONE)
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// --- Availability Logic ---

/// Id of the first room, in `rooms` order, with no active booking overlapping
/// `[start_date, end_date]` (both ends inclusive).
pub fn first_free_room(
    rooms: &[Room],
    bookings: &[Booking],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Option<i64> {
    rooms
        .iter()
        .find(|room| {
            !bookings.iter().any(|booking| {
                booking.is_active
                    && booking.room_id == room.id
                    && booking.overlaps(start_date, end_date)
            })
        })
        .map(|room| room.id)
}

/// Dates in `[start_date, end_date]` on which every room has an active
/// booking. With no rooms nothing is occupied.
pub fn fully_occupied_dates(
    rooms: &[Room],
    bookings: &[Booking],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<NaiveDate> {
    if rooms.is_empty() || start_date > end_date {
        return Vec::new();
    }

    let mut by_room: HashMap<i64, Vec<&Booking>> = HashMap::new();
    for booking in bookings
        .iter()
        .filter(|b| b.is_active && b.overlaps(start_date, end_date))
    {
        by_room.entry(booking.room_id).or_default().push(booking);
    }

    std::iter::successors(Some(start_date), |date| {
        date.succ_opt().filter(|next| *next <= end_date)
    })
    .filter(|date| {
        rooms.iter().all(|room| {
            by_room
                .get(&room.id)
                .is_some_and(|room_bookings| room_bookings.iter().any(|b| b.covers(*date)))
        })
    })
    .collect()
}

/// Decides room availability and places bookings.
///
/// Stateless between calls: every operation reads a fresh snapshot of rooms
/// and bookings from the repositories.
#[derive(Clone)]
pub struct BookingManager {
    bookings: Arc<dyn Repository<Booking>>,
    rooms: Arc<dyn Repository<Room>>,
    clock: Arc<dyn Clock>,
}

impl BookingManager {
    pub fn new(bookings: Arc<dyn Repository<Booking>>, rooms: Arc<dyn Repository<Room>>) -> Self {
        Self {
            bookings,
            rooms,
            clock: Arc::new(ZonedClock::default()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn bookings(&self) -> &Arc<dyn Repository<Booking>> {
        &self.bookings
    }

    pub fn rooms(&self) -> &Arc<dyn Repository<Room>> {
        &self.rooms
    }

    /// Places `booking` on the first free room and stores it.
    ///
    /// Returns `Ok(false)` without touching storage when no room is free.
    ///
    /// The availability check and the insert are two separate repository
    /// calls, so concurrent requests for the same dates can both succeed.
    pub async fn create_booking(&self, mut booking: Booking) -> Result<bool, BookingError> {
        let Some(room_id) = self
            .find_available_room(booking.start_date, booking.end_date)
            .await?
        else {
            info!(
                start_date = %booking.start_date,
                end_date = %booking.end_date,
                "no room available"
            );
            return Ok(false);
        };

        booking.room_id = room_id;
        booking.is_active = true;
        let stored = self.bookings.add(booking).await?;
        info!(
            booking_id = stored.id,
            room_id,
            start_date = %stored.start_date,
            end_date = %stored.end_date,
            "booking created"
        );
        Ok(true)
    }

    /// First room with no active booking overlapping the range, or `None`.
    ///
    /// Fails with [`BookingError::InvalidRange`] unless
    /// `today < start_date <= end_date`.
    pub async fn find_available_room(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<i64>, BookingError> {
        if start_date <= self.today() || start_date > end_date {
            return Err(BookingError::InvalidRange);
        }

        let bookings = self.bookings.get_all().await?;
        let rooms = self.rooms.get_all().await?;
        debug!(
            rooms = rooms.len(),
            bookings = bookings.len(),
            "searching for a free room from {} to {}",
            start_date,
            end_date
        );

        Ok(first_free_room(&rooms, &bookings, start_date, end_date))
    }

    /// Dates in the inclusive range on which every room is booked.
    pub async fn get_fully_occupied_dates(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<NaiveDate>, BookingError> {
        if start_date > end_date {
            return Err(BookingError::InvalidRange);
        }

        let bookings = self.bookings.get_all().await?;
        let rooms = self.rooms.get_all().await?;

        Ok(fully_occupied_dates(&rooms, &bookings, start_date, end_date))
    }
}
