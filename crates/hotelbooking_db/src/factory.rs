//! Factory for creating database clients

use crate::client::DbClient;
use crate::error::DbError;
use hotelbooking_config::AppConfig;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct DbClientFactory;

impl DbClientFactory {
    pub fn new() -> Self {
        Self
    }

    /// Connects to the configured database, creates the schema and applies
    /// the seed data.
    ///
    /// # Errors
    ///
    /// Fails if the `database` section is missing or the connection,
    /// schema creation or seeding fails.
    pub async fn from_app_config(&self, config: &AppConfig) -> Result<DbClient, DbError> {
        debug!("Creating database client from application configuration");

        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| DbError::ConfigError("Database configuration is missing".to_string()))?;

        let client = DbClient::from_config(db_config).await?;
        client.init_schema().await?;
        client.seed(config).await?;
        Ok(client)
    }
}
