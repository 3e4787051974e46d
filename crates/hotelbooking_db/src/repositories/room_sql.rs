use super::{insert_error, query_error};
use crate::DbClient;
use async_trait::async_trait;
use hotelbooking_core::{Repository, RepositoryError, Room};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SqlRoomRepository {
    db_client: DbClient,
}

impl SqlRoomRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn room_from_row(row: &SqliteRow) -> Result<Room, sqlx::Error> {
    Ok(Room {
        id: row.try_get("id")?,
        description: row.try_get("description")?,
    })
}

#[async_trait]
impl Repository<Room> for SqlRoomRepository {
    async fn get_all(&self) -> Result<Vec<Room>, RepositoryError> {
        sqlx::query("SELECT id, description FROM rooms ORDER BY id")
            .fetch_all(self.db_client.pool())
            .await
            .and_then(|rows| rows.iter().map(room_from_row).collect())
            .map_err(|e| query_error("Failed to list rooms", e))
    }

    async fn get(&self, id: i64) -> Result<Option<Room>, RepositoryError> {
        sqlx::query("SELECT id, description FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .and_then(|row| row.as_ref().map(room_from_row).transpose())
            .map_err(|e| query_error("Failed to find room", e))
    }

    async fn add(&self, room: Room) -> Result<Room, RepositoryError> {
        debug!(room_id = room.id, "Inserting room");
        // An id of 0 binds NULL so SQLite assigns the next one
        let id = (room.id != 0).then_some(room.id);
        let row = sqlx::query(
            "INSERT INTO rooms (id, description) VALUES ($1, $2) RETURNING id, description",
        )
        .bind(id)
        .bind(&room.description)
        .fetch_one(self.db_client.pool())
        .await
        .map_err(|e| insert_error(room.id, e))?;

        room_from_row(&row).map_err(|e| query_error("Failed to read inserted room", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> SqlRoomRepository {
        let client = DbClient::from_url("sqlite::memory:").await.unwrap();
        client.init_schema().await.unwrap();
        SqlRoomRepository::new(client)
    }

    #[tokio::test]
    async fn test_add_and_get_room() {
        let repo = repository().await;
        let added = repo.add(Room::new(0, "Garden view")).await.unwrap();
        assert_eq!(added.id, 1);

        let found = repo.get(added.id).await.unwrap();
        assert_eq!(found, Some(added));
        assert_eq!(repo.get(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_reported() {
        let repo = repository().await;
        repo.add(Room::new(5, "A")).await.unwrap();
        let err = repo.add(Room::new(5, "B")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(5)));
    }

    #[tokio::test]
    async fn test_get_all_orders_by_id() {
        let repo = repository().await;
        repo.add(Room::new(3, "C")).await.unwrap();
        repo.add(Room::new(1, "A")).await.unwrap();
        let ids: Vec<i64> = repo.get_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
