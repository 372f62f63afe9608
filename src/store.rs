use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;
use crate::models::Kebab;

/// Shareable PostgreSQL-backed store for use across async handlers
///
/// Wraps a connection pool; cloning is cheap and shares the pool. Every
/// operation is a single round trip. Schema creation is not this service's
/// responsibility; the `kebabs` table is expected to exist:
///
/// ```sql
/// CREATE TABLE kebabs (id SERIAL PRIMARY KEY, flavor TEXT, price INTEGER);
/// ```
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Create a new store from configuration
    ///
    /// Connects eagerly, so an unreachable database fails startup rather than
    /// the first request.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.connection_url())
            .await
            .context("Failed to connect to PostgreSQL")?;

        tracing::info!(
            "Connected to PostgreSQL database '{}' at {}:{}",
            config.db_name,
            config.db_host,
            config.db_port
        );

        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// List all kebabs
    ///
    /// Row order is whatever the database returns; no ordering is guaranteed.
    ///
    /// # Errors
    /// Returns an error if the query fails
    pub async fn list(&self) -> Result<Vec<Kebab>> {
        let kebabs = sqlx::query_as::<_, Kebab>("SELECT id, flavor, price FROM kebabs")
            .fetch_all(&self.pool)
            .await
            .context("Failed to query kebabs")?;

        tracing::debug!("Listed {} kebabs", kebabs.len());
        Ok(kebabs)
    }

    /// Read a single kebab by its id
    ///
    /// # Returns
    /// * `Ok(Some(kebab))` - Row found and returned
    /// * `Ok(None)` - No row with that id
    /// * `Err(_)` - Query failed
    pub async fn get(&self, id: i32) -> Result<Option<Kebab>> {
        let kebab =
            sqlx::query_as::<_, Kebab>("SELECT id, flavor, price FROM kebabs WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to query kebab")?;

        tracing::debug!("Get kebab {}: found = {}", id, kebab.is_some());
        Ok(kebab)
    }

    /// Insert a new kebab and return the database-assigned id
    ///
    /// # Errors
    /// Returns an error if the insert fails
    pub async fn create(&self, flavor: &str, price: i32) -> Result<i32> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO kebabs (flavor, price) VALUES ($1, $2) RETURNING id")
                .bind(flavor)
                .bind(price)
                .fetch_one(&self.pool)
                .await
                .context("Failed to insert kebab")?;

        tracing::debug!("Created kebab with id: {}", id);
        Ok(id)
    }

    /// Overwrite flavor and price for the kebab with the given id
    ///
    /// # Returns
    /// The number of rows affected (0 when the id does not exist)
    pub async fn update(&self, id: i32, flavor: &str, price: i32) -> Result<u64> {
        let result = sqlx::query("UPDATE kebabs SET flavor = $1, price = $2 WHERE id = $3")
            .bind(flavor)
            .bind(price)
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to update kebab")?;

        tracing::debug!("Updated kebab {}: {} rows affected", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Delete the kebab with the given id
    ///
    /// # Returns
    /// The number of rows affected (0 when the id does not exist)
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM kebabs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete kebab")?;

        tracing::debug!("Deleted kebab {}: {} rows affected", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Perform a health check by executing a simple query
    ///
    /// # Errors
    /// Returns an error if the database is unreachable or the query fails
    pub async fn health_check(&self) -> Result<()> {
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("Failed to execute health check query")?;

        if one == 1 {
            tracing::debug!("Health check query succeeded");
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned unexpected result"))
        }
    }
}
