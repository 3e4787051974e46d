// --- File: crates/hotelbooking_core/src/lib.rs ---
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod repository;
pub mod routes;

pub use handlers::BookingState;
pub use logic::{BookingError, BookingManager, Clock, FixedClock, ZonedClock};
pub use models::{Booking, Customer, Room};
pub use repository::{InMemoryRepository, Repository, RepositoryError};
