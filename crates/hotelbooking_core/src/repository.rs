//! Repository abstraction for rooms, bookings and customers.
//!
//! The booking logic only ever talks to storage through [`Repository`], so the
//! same manager runs against the in-memory store, the SQLite store in
//! `hotelbooking-db`, or a mock in tests.

use crate::models::Entity;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Entity with id {0} already exists")]
    Duplicate(i64),
}

/// Generic storage boundary, one implementation per entity type.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All stored entities, in storage order.
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError>;

    async fn get(&self, id: i64) -> Result<Option<T>, RepositoryError>;

    /// Stores `entity` and returns it with its id filled in. An id of 0 asks
    /// the repository to assign one.
    async fn add(&self, entity: T) -> Result<T, RepositoryError>;
}

/// Vec-backed repository. Keeps insertion order, which is the order
/// [`crate::logic::BookingManager`] scans rooms in.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn with_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: RwLock::new(items.into_iter().collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned())
    }

    async fn add(&self, mut entity: T) -> Result<T, RepositoryError> {
        let mut items = self.items.write().await;
        if entity.id() == 0 {
            let next_id = items.iter().map(Entity::id).max().unwrap_or(0) + 1;
            entity.set_id(next_id);
        } else if items.iter().any(|item| item.id() == entity.id()) {
            return Err(RepositoryError::Duplicate(entity.id()));
        }
        debug!(id = entity.id(), "storing entity in memory");
        items.push(entity.clone());
        Ok(entity)
    }
}
