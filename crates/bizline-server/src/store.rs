use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::domain::{Business, NewBusiness};
use crate::error::Result;

const CREATE_BUSINESSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS businesses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    location TEXT NOT NULL,
    rating REAL DEFAULT 4.3,
    reviews INTEGER DEFAULT 127,
    headline TEXT NOT NULL,
    createdAt TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)
"#;

/// Handle to the `businesses` table, held for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct BusinessStore {
    pool: SqlitePool,
}

impl BusinessStore {
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .with_context(|| format!("invalid DATABASE_URL {:?}", config.database_url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .context("failed to open business store")?;

        let store = Self { pool };
        store
            .initialize()
            .await
            .context("failed to ensure businesses table")?;

        Ok(store)
    }

    /// Creates the table if it does not exist yet.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(CREATE_BUSINESSES_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn insert(&self, new: &NewBusiness) -> Result<Business> {
        let business: Business = sqlx::query_as(
            r#"
            INSERT INTO businesses (name, location, rating, reviews, headline)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.location)
        .bind(new.rating)
        .bind(new.reviews)
        .bind(&new.headline)
        .fetch_one(&self.pool)
        .await?;

        Ok(business)
    }

    /// Every record, newest first.
    pub async fn list_all(&self) -> Result<Vec<Business>> {
        let businesses: Vec<Business> =
            sqlx::query_as("SELECT * FROM businesses ORDER BY createdAt DESC, id DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(businesses)
    }

    /// Returns the number of rows removed, 0 or 1.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM businesses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
