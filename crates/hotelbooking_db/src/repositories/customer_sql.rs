use super::{insert_error, query_error};
use crate::DbClient;
use async_trait::async_trait;
use hotelbooking_core::{Customer, Repository, RepositoryError};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

#[derive(Debug, Clone)]
pub struct SqlCustomerRepository {
    db_client: DbClient,
}

impl SqlCustomerRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn customer_from_row(row: &SqliteRow) -> Result<Customer, sqlx::Error> {
    Ok(Customer {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
    })
}

#[async_trait]
impl Repository<Customer> for SqlCustomerRepository {
    async fn get_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        sqlx::query("SELECT id, name, email FROM customers ORDER BY id")
            .fetch_all(self.db_client.pool())
            .await
            .and_then(|rows| rows.iter().map(customer_from_row).collect())
            .map_err(|e| query_error("Failed to list customers", e))
    }

    async fn get(&self, id: i64) -> Result<Option<Customer>, RepositoryError> {
        sqlx::query("SELECT id, name, email FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .and_then(|row| row.as_ref().map(customer_from_row).transpose())
            .map_err(|e| query_error("Failed to find customer", e))
    }

    async fn add(&self, customer: Customer) -> Result<Customer, RepositoryError> {
        let id = (customer.id != 0).then_some(customer.id);
        let row = sqlx::query(
            "INSERT INTO customers (id, name, email) VALUES ($1, $2, $3) \
             RETURNING id, name, email",
        )
        .bind(id)
        .bind(&customer.name)
        .bind(&customer.email)
        .fetch_one(self.db_client.pool())
        .await
        .map_err(|e| insert_error(customer.id, e))?;

        customer_from_row(&row).map_err(|e| query_error("Failed to read inserted customer", e))
    }
}
