// --- File: crates/hotelbooking_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP error responses
pub mod logging; // Logging utilities

pub use error::{conflict, not_found, HotelBookingError, HttpStatusCode};

pub use logging::{init, init_with_level, log_result};
