// PostgreSQL implementation of the waitlist ports.
//
// Responsibilities
// - Rely on the UNIQUE(email) constraint for duplicate detection.
// - Increment likes in one statement: UPDATE .. SET likes = likes + 1 .. RETURNING likes.
// - Expose plain read and conditional write for the read-modify-write fallback.
//
// Ids that are not UUIDs cannot exist in the table and are reported as NotFound.

use crate::modules::waitlist::core::entry::{NewWaitlistEntry, WaitlistEntry};
use crate::modules::waitlist::core::ports::WaitlistRepository;
use crate::shared::core::counter::{Counter, CounterCells};
use crate::shared::core::errors::StoreError;
use crate::shared::infrastructure::store::postgres::{map_sqlx_error, to_timestamp};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct WaitlistEntryRecord {
    id: Uuid,
    email: String,
    likes: i64,
    created_at: DateTime<Utc>,
}

impl From<WaitlistEntryRecord> for WaitlistEntry {
    fn from(record: WaitlistEntryRecord) -> Self {
        Self {
            id: record.id.to_string(),
            email: record.email,
            likes: record.likes,
            created_at: record.created_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgWaitlist {
    pool: PgPool,
}

impl PgWaitlist {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::NotFound { key: id.to_string() })
}

#[async_trait::async_trait]
impl WaitlistRepository for PgWaitlist {
    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        let email = entry.email.into_inner();
        let record = sqlx::query_as::<_, WaitlistEntryRecord>(
            "INSERT INTO waitlist_entries (id, email, created_at) VALUES ($1, $2, $3) \
             RETURNING id, email, likes, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(&email)
        .bind(to_timestamp(entry.created_at)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| match map_sqlx_error(error) {
            StoreError::DuplicateKey { .. } => StoreError::DuplicateKey { key: email.clone() },
            other => other,
        })?;
        Ok(record.into())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM waitlist_entries WHERE id = $1")
            .bind(parse_id(id)?)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { key: id.to_string() });
        }
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<WaitlistEntry>, StoreError> {
        let records = sqlx::query_as::<_, WaitlistEntryRecord>(
            "SELECT id, email, likes, created_at FROM waitlist_entries \
             ORDER BY created_at DESC, seq DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(records.into_iter().map(WaitlistEntry::from).collect())
    }
}

#[async_trait::async_trait]
impl Counter for PgWaitlist {
    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE waitlist_entries SET likes = likes + 1 WHERE id = $1 RETURNING likes",
        )
        .bind(parse_id(key)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| StoreError::NotFound { key: key.to_string() })
    }
}

#[async_trait::async_trait]
impl CounterCells for PgWaitlist {
    async fn read(&self, key: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT likes FROM waitlist_entries WHERE id = $1")
            .bind(parse_id(key)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| StoreError::NotFound { key: key.to_string() })
    }

    async fn write_if_present(&self, key: &str, value: i64) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE waitlist_entries SET likes = $2 WHERE id = $1")
            .bind(parse_id(key)?)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { key: key.to_string() });
        }
        Ok(())
    }
}
