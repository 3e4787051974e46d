//! SQL implementations of the core repository trait, one per entity.

pub mod booking_sql;
pub mod customer_sql;
pub mod room_sql;

pub use booking_sql::SqlBookingRepository;
pub use customer_sql::SqlCustomerRepository;
pub use room_sql::SqlRoomRepository;

use crate::error::DbError;
use hotelbooking_core::RepositoryError;
use tracing::error;

/// Maps an insert failure, turning a primary-key clash on `id` into
/// [`RepositoryError::Duplicate`].
pub(crate) fn insert_error(id: i64, err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepositoryError::Duplicate(id);
        }
    }
    error!("Failed to insert row: {}", err);
    DbError::QueryError(err.to_string()).into()
}

pub(crate) fn query_error(context: &str, err: sqlx::Error) -> RepositoryError {
    error!("{}: {}", context, err);
    DbError::QueryError(err.to_string()).into()
}
