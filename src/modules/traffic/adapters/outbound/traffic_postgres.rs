// PostgreSQL implementation of the traffic ledger.
//
// Responsibilities
// - Rely on the UNIQUE(ip_address) constraint for deduplication.
// - upsert_visit is one INSERT .. ON CONFLICT (ip_address) DO UPDATE .. RETURNING statement.
// - visit_count is a counter keyed by ip: UPDATE .. SET visit_count = visit_count + 1 ..
//   RETURNING visit_count, plus plain read and conditional write for the fallback.
// - touch_last_visit is a conditional UPDATE; zero rows means NotFound.

use crate::modules::traffic::core::order::TrafficOrder;
use crate::modules::traffic::core::ports::TrafficLedger;
use crate::modules::traffic::core::traffic_record::TrafficRecord;
use crate::shared::core::counter::{Counter, CounterCells};
use crate::shared::core::errors::StoreError;
use crate::shared::infrastructure::store::postgres::{map_sqlx_error, to_timestamp};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const RETURNING: &str = "RETURNING id, ip_address, visit_count, last_visit";

#[derive(Debug, sqlx::FromRow)]
struct TrafficRow {
    id: Uuid,
    ip_address: String,
    visit_count: i64,
    last_visit: DateTime<Utc>,
}

impl From<TrafficRow> for TrafficRecord {
    fn from(row: TrafficRow) -> Self {
        Self {
            id: row.id.to_string(),
            ip_address: row.ip_address,
            visit_count: row.visit_count,
            last_visit: row.last_visit.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgTrafficLedger {
    pool: PgPool,
}

impl PgTrafficLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl TrafficLedger for PgTrafficLedger {
    async fn upsert_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError> {
        let sql = format!(
            "INSERT INTO traffic (id, ip_address, visit_count, last_visit) VALUES ($1, $2, 1, $3) \
             ON CONFLICT (ip_address) DO UPDATE \
             SET visit_count = traffic.visit_count + 1, last_visit = EXCLUDED.last_visit \
             {RETURNING}"
        );
        let row = sqlx::query_as::<_, TrafficRow>(&sql)
            .bind(Uuid::now_v7())
            .bind(ip)
            .bind(to_timestamp(seen_at)?)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn find_by_ip(&self, ip: &str) -> Result<Option<TrafficRecord>, StoreError> {
        let row = sqlx::query_as::<_, TrafficRow>(
            "SELECT id, ip_address, visit_count, last_visit FROM traffic WHERE ip_address = $1",
        )
        .bind(ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(TrafficRecord::from))
    }

    async fn insert_first_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError> {
        let sql = format!(
            "INSERT INTO traffic (id, ip_address, visit_count, last_visit) VALUES ($1, $2, 1, $3) \
             {RETURNING}"
        );
        let row = sqlx::query_as::<_, TrafficRow>(&sql)
            .bind(Uuid::now_v7())
            .bind(ip)
            .bind(to_timestamp(seen_at)?)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| match map_sqlx_error(error) {
                StoreError::DuplicateKey { .. } => StoreError::DuplicateKey { key: ip.to_string() },
                other => other,
            })?;
        Ok(row.into())
    }

    async fn touch_last_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError> {
        let sql = format!("UPDATE traffic SET last_visit = $2 WHERE ip_address = $1 {RETURNING}");
        sqlx::query_as::<_, TrafficRow>(&sql)
            .bind(ip)
            .bind(to_timestamp(seen_at)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .map(TrafficRecord::from)
            .ok_or_else(|| StoreError::NotFound { key: ip.to_string() })
    }

    async fn list(&self, order: TrafficOrder) -> Result<Vec<TrafficRecord>, StoreError> {
        let sql = format!(
            "SELECT id, ip_address, visit_count, last_visit FROM traffic ORDER BY {}",
            order.sql_order_by()
        );
        let rows = sqlx::query_as::<_, TrafficRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(TrafficRecord::from).collect())
    }
}

#[async_trait::async_trait]
impl Counter for PgTrafficLedger {
    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE traffic SET visit_count = visit_count + 1 WHERE ip_address = $1 \
             RETURNING visit_count",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| StoreError::NotFound { key: key.to_string() })
    }
}

#[async_trait::async_trait]
impl CounterCells for PgTrafficLedger {
    async fn read(&self, key: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>("SELECT visit_count FROM traffic WHERE ip_address = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or_else(|| StoreError::NotFound { key: key.to_string() })
    }

    async fn write_if_present(&self, key: &str, value: i64) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE traffic SET visit_count = $2 WHERE ip_address = $1")
            .bind(key)
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
