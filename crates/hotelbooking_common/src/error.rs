// --- File: crates/hotelbooking_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for the hotel booking service.
///
/// Domain crates convert their own errors into this one at the HTTP boundary,
/// where [`HttpStatusCode`] decides the response status.
#[derive(Error, Debug)]
pub enum HotelBookingError {
    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred due to a conflict (e.g., no room left for the requested dates)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for HotelBookingError {
    fn status_code(&self) -> u16 {
        match self {
            HotelBookingError::DatabaseError(_) => 500,
            HotelBookingError::ConflictError(_) => 409,
            HotelBookingError::NotFoundError(_) => 404,
            HotelBookingError::InternalError(_) => 500,
        }
    }
}

pub fn not_found<T: fmt::Display>(message: T) -> HotelBookingError {
    HotelBookingError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> HotelBookingError {
    HotelBookingError::ConflictError(message.to_string())
}
