//! Application state for reserve-server

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl AppState {
    /// Create a new AppState: connect the pool and apply migrations.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;

        db::MIGRATOR.run(&pool).await?;
        tracing::info!("Reservations table ready");

        Ok(Self { pool })
    }
}
