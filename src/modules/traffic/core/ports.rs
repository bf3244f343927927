// What the visit deduplicator needs from a backing store.
//
// Boundaries
// - One record per ip is enforced by the store (unique constraint on ip_address).
// - upsert_visit is the single-statement path; find_by_ip, insert_first_visit and
//   touch_last_visit are the primitives of the select-then-branch fallback.
// - visit_count of an existing record is exposed as a counter keyed by ip, through
//   shared::core::counter::{Counter, CounterCells}, implemented by the same adapters.

use crate::modules::traffic::core::order::TrafficOrder;
use crate::modules::traffic::core::traffic_record::TrafficRecord;
use crate::shared::core::errors::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait TrafficLedger: Send + Sync {
    /// Insert {ip, 1, seen_at}, or on conflict add one and overwrite last_visit, atomically.
    async fn upsert_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError>;

    async fn find_by_ip(&self, ip: &str) -> Result<Option<TrafficRecord>, StoreError>;

    /// Fails with DuplicateKey when a record for the ip already exists.
    async fn insert_first_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError>;

    /// Overwrite last_visit and return the record. Fails with NotFound when there is no record for the ip.
    async fn touch_last_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError>;

    async fn list(&self, order: TrafficOrder) -> Result<Vec<TrafficRecord>, StoreError>;
}
