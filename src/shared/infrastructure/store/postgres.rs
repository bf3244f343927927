// PostgreSQL plumbing for the store adapters.
//
// Responsibilities
// - Open the connection pool and bootstrap the two tables from schema.sql.
// - Map sqlx errors onto the StoreError taxonomy.
// - Convert between epoch milliseconds and TIMESTAMPTZ.

use crate::shared::core::errors::StoreError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

pub const SCHEMA: &str = include_str!("../../../../schema.sql");

pub async fn connect(database_url: &str, acquire_timeout: Duration) -> Result<PgPool, StoreError> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
        .map_err(map_sqlx_error)
}

pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(map_sqlx_error)?;
    Ok(())
}

pub fn map_sqlx_error(error: sqlx::Error) -> StoreError {
    match &error {
        sqlx::Error::Database(database_error) if database_error.is_unique_violation() => {
            StoreError::DuplicateKey {
                key: database_error
                    .constraint()
                    .unwrap_or("unique constraint")
                    .to_string(),
            }
        }
        sqlx::Error::RowNotFound => StoreError::NotFound {
            key: "row".to_string(),
        },
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::Transient(error.to_string()),
        _ => StoreError::Unknown(error.to_string()),
    }
}

pub fn to_timestamp(epoch_ms: i64) -> Result<DateTime<Utc>, StoreError> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .ok_or_else(|| StoreError::Unknown(format!("timestamp out of range: {epoch_ms}")))
}
