//! SQL implementation of the booking repository
//!
//! Dates are stored as `YYYY-MM-DD` text, which sorts and compares the same
//! way the dates do.

use super::{insert_error, query_error};
use crate::DbClient;
use async_trait::async_trait;
use hotelbooking_core::{Booking, Repository, RepositoryError};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

const COLUMNS: &str = "id, start_date, end_date, is_active, customer_id, room_id";

#[derive(Debug, Clone)]
pub struct SqlBookingRepository {
    db_client: DbClient,
}

impl SqlBookingRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn booking_from_row(row: &SqliteRow) -> Result<Booking, sqlx::Error> {
    Ok(Booking {
        id: row.try_get("id")?,
        start_date: row.try_get("start_date")?,
        end_date: row.try_get("end_date")?,
        is_active: row.try_get("is_active")?,
        customer_id: row.try_get("customer_id")?,
        room_id: row.try_get("room_id")?,
    })
}

#[async_trait]
impl Repository<Booking> for SqlBookingRepository {
    async fn get_all(&self) -> Result<Vec<Booking>, RepositoryError> {
        let query = format!("SELECT {} FROM bookings ORDER BY id", COLUMNS);
        sqlx::query(&query)
            .fetch_all(self.db_client.pool())
            .await
            .and_then(|rows| rows.iter().map(booking_from_row).collect())
            .map_err(|e| query_error("Failed to list bookings", e))
    }

    async fn get(&self, id: i64) -> Result<Option<Booking>, RepositoryError> {
        let query = format!("SELECT {} FROM bookings WHERE id = $1", COLUMNS);
        sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .and_then(|row| row.as_ref().map(booking_from_row).transpose())
            .map_err(|e| query_error("Failed to find booking", e))
    }

    async fn add(&self, booking: Booking) -> Result<Booking, RepositoryError> {
        debug!(
            room_id = booking.room_id,
            start_date = %booking.start_date,
            end_date = %booking.end_date,
            "Inserting booking"
        );
        let query = format!(
            "INSERT INTO bookings ({}) VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            COLUMNS, COLUMNS
        );
        let id = (booking.id != 0).then_some(booking.id);
        let row = sqlx::query(&query)
            .bind(id)
            .bind(booking.start_date)
            .bind(booking.end_date)
            .bind(booking.is_active)
            .bind(booking.customer_id)
            .bind(booking.room_id)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| insert_error(booking.id, e))?;

        booking_from_row(&row).map_err(|e| query_error("Failed to read inserted booking", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, d).unwrap()
    }

    async fn repository() -> SqlBookingRepository {
        let client = DbClient::from_url("sqlite::memory:").await.unwrap();
        client.init_schema().await.unwrap();
        SqlBookingRepository::new(client)
    }

    #[tokio::test]
    async fn test_booking_round_trips_through_sqlite() {
        let repo = repository().await;
        let mut booking = Booking::active(2, date(10), date(12));
        booking.customer_id = 9;

        let stored = repo.add(booking).await.unwrap();
        assert_eq!(stored.id, 1);

        let found = repo.get(stored.id).await.unwrap().unwrap();
        assert_eq!(found.start_date, date(10));
        assert_eq!(found.end_date, date(12));
        assert!(found.is_active);
        assert_eq!(found.customer_id, 9);
        assert_eq!(found.room_id, 2);
    }

    #[tokio::test]
    async fn test_get_all_in_insertion_order() {
        let repo = repository().await;
        repo.add(Booking::active(1, date(1), date(2))).await.unwrap();
        repo.add(Booking::active(2, date(3), date(4))).await.unwrap();

        let rooms: Vec<i64> = repo
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|b| b.room_id)
            .collect();
        assert_eq!(rooms, vec![1, 2]);
    }
}
