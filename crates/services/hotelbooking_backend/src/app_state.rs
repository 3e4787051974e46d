// --- File: crates/services/hotelbooking_backend/src/app_state.rs ---
use hotelbooking_config::AppConfig;
use hotelbooking_core::BookingState;
use std::sync::Arc;
#[allow(unused_imports)] // only used without the "database" feature
use tracing::{info, warn};

#[cfg(feature = "database")]
use {
    hotelbooking_core::{BookingManager, ZonedClock},
    hotelbooking_db::{
        DbClientFactory, DbError, SqlBookingRepository, SqlCustomerRepository, SqlRoomRepository,
    },
};

/// Builds the state behind the booking routes.
///
/// With `use_database` set (and the "database" feature compiled in) the
/// repositories live in SQLite; otherwise they are in memory, seeded from
/// the configuration.
#[cfg(feature = "database")]
pub async fn build_state(config: Arc<AppConfig>) -> Result<Arc<BookingState>, DbError> {
    if !config.use_database {
        info!("Using in-memory repositories");
        return Ok(Arc::new(BookingState::in_memory(&config)));
    }

    let client = DbClientFactory::new().from_app_config(&config).await?;
    info!("Using SQLite repositories");

    let manager = BookingManager::new(
        Arc::new(SqlBookingRepository::new(client.clone())),
        Arc::new(SqlRoomRepository::new(client.clone())),
    )
    .with_clock(Arc::new(ZonedClock::from_config(&config.booking)));

    Ok(Arc::new(BookingState::new(
        manager,
        Arc::new(SqlCustomerRepository::new(client)),
    )))
}

#[cfg(not(feature = "database"))]
pub async fn build_state(config: Arc<AppConfig>) -> Result<Arc<BookingState>, std::convert::Infallible> {
    if config.use_database {
        warn!("use_database is set but the \"database\" feature is not enabled; using in-memory repositories");
    } else {
        info!("Using in-memory repositories");
    }
    Ok(Arc::new(BookingState::in_memory(&config)))
}
