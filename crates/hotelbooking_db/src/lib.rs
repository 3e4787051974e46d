//! SQLite storage for the hotel booking service
//!
//! Implements the `Repository` trait from `hotelbooking-core` for rooms,
//! customers and bookings on top of a SQLx connection pool.
//!
//! # Example
//!
//! ```rust,no_run
//! use hotelbooking_config::AppConfig;
//! use hotelbooking_db::{DbClientFactory, SqlRoomRepository};
//!
//! async fn setup_db(config: &AppConfig) -> Result<SqlRoomRepository, hotelbooking_db::DbError> {
//!     let client = DbClientFactory::new().from_app_config(config).await?;
//!     Ok(SqlRoomRepository::new(client))
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;

pub use client::DbClient;
pub use error::DbError;
pub use factory::DbClientFactory;
pub use repositories::{SqlBookingRepository, SqlCustomerRepository, SqlRoomRepository};
