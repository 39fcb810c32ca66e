//! PostgreSQL connection pool management
//!
//! Repositories hold a clone of the pool. Each query checks a connection out
//! and hands it back when the query future completes or is dropped.

use forum_common::{AppConfig, ConfigError, DatabaseConfig};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Forum schema, compiled into the binary
const SCHEMA: &str = include_str!("../../migrations/20240101000000_forum_schema.sql");

/// Advisory lock key serializing concurrent schema setup
const SCHEMA_LOCK_KEY: i64 = 0x666f_7275_6d;

/// Errors raised while setting up the database
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database connection failed: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migrate(#[source] sqlx::Error),
}

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
}

/// Create a connection pool from the environment (`DATABASE_URL` and friends)
pub async fn create_pool_from_env() -> Result<PgPool, PoolError> {
    let config = AppConfig::from_env()?;
    Ok(create_pool(&config.database).await?)
}

/// Apply the embedded forum schema
///
/// Every statement is `IF NOT EXISTS`, so running this against an
/// initialized database changes nothing.
pub async fn run_migrations(pool: &PgPool) -> Result<(), PoolError> {
    let mut tx = pool.begin().await.map_err(PoolError::Migrate)?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await
        .map_err(PoolError::Migrate)?;
    sqlx::raw_sql(SCHEMA)
        .execute(&mut *tx)
        .await
        .map_err(PoolError::Migrate)?;

    tx.commit().await.map_err(PoolError::Migrate)?;

    info!("Database schema up to date");
    Ok(())
}
