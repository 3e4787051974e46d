//! Database client for the hotel booking service
//!
//! Wraps a SQLite connection pool and owns the schema and the start-up seed.

use crate::error::DbError;
use hotelbooking_config::{AppConfig, DatabaseConfig};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error, info};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        description TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        is_active INTEGER NOT NULL,
        customer_id INTEGER NOT NULL,
        room_id INTEGER NOT NULL
    )
    "#,
];

/// Database client
///
/// Cheap to clone; all clones share one pool.
#[derive(Debug, Clone)]
pub struct DbClient {
    pool: SqlitePool,
}

impl DbClient {
    /// Create a new database client from a database configuration
    ///
    /// # Errors
    ///
    /// Fails if the URL is empty or the connection cannot be opened.
    pub async fn from_config(db_config: &DatabaseConfig) -> Result<Self, DbError> {
        if db_config.url.is_empty() {
            return Err(DbError::ConfigError("Database URL is empty".to_string()));
        }
        let max_connections = db_config
            .max_connections
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        let pool = Self::create_pool(&db_config.url, max_connections).await?;
        Ok(Self { pool })
    }

    /// Create a new database client from a database URL
    pub async fn from_url(db_url: &str) -> Result<Self, DbError> {
        if db_url.is_empty() {
            return Err(DbError::UrlError("Database URL is empty".to_string()));
        }
        let pool = Self::create_pool(db_url, DEFAULT_MAX_CONNECTIONS).await?;
        Ok(Self { pool })
    }

    async fn create_pool(db_url: &str, max_connections: u32) -> Result<SqlitePool, DbError> {
        debug!("Creating database pool with URL: {}", db_url);

        let options = SqliteConnectOptions::from_str(db_url)
            .map_err(|e| DbError::UrlError(e.to_string()))?
            .create_if_missing(true);

        // Every connection to an in-memory database sees its own empty
        // database, so those get a single connection that never expires.
        let pool_options = if db_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(Duration::from_secs(3))
                .idle_timeout(Duration::from_secs(600))
        };

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            error!("Failed to create database pool: {}", e);
            DbError::PoolError(e.to_string())
        })?;

        info!("Database pool created successfully");
        Ok(pool)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Execute a query that returns no rows, returning the number of rows affected
    pub async fn execute(&self, query: &str) -> Result<u64, DbError> {
        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| DbError::QueryError(e.to_string()))
    }

    /// Creates the rooms, customers and bookings tables if they are missing
    pub async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing booking schema");
        for statement in SCHEMA {
            self.execute(statement).await?;
        }
        info!("Booking schema initialized successfully");
        Ok(())
    }

    /// Inserts the rooms and customers listed in the configuration.
    ///
    /// Rows whose id already exists are left untouched, so seeding an
    /// existing database is a no-op.
    pub async fn seed(&self, config: &AppConfig) -> Result<(), DbError> {
        for room in &config.rooms {
            sqlx::query("INSERT OR IGNORE INTO rooms (id, description) VALUES ($1, $2)")
                .bind(room.id)
                .bind(&room.description)
                .execute(&self.pool)
                .await?;
        }
        for customer in &config.customers {
            sqlx::query("INSERT OR IGNORE INTO customers (id, name, email) VALUES ($1, $2, $3)")
                .bind(customer.id)
                .bind(&customer.name)
                .bind(&customer.email)
                .execute(&self.pool)
                .await?;
        }
        info!(
            rooms = config.rooms.len(),
            customers = config.customers.len(),
            "Seed data applied"
        );
        Ok(())
    }

    /// Check if the database is healthy by executing a simple query
    pub async fn is_healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

impl std::fmt::Display for DbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DbClient")
    }
}
