use hotelbooking_core::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// The `database` section is missing or unusable
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Opening the pool failed
    #[error("Database pool error: {0}")]
    PoolError(String),

    #[error("Database query error: {0}")]
    QueryError(String),
}

/// Repositories surface every database failure as a storage error.
impl From<DbError> for RepositoryError {
    fn from(err: DbError) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_becomes_storage_error() {
        let err: RepositoryError = DbError::QueryError("no such table: rooms".to_string()).into();
        assert!(matches!(
            err,
            RepositoryError::Storage(ref message) if message.contains("no such table: rooms")
        ));
    }
}
