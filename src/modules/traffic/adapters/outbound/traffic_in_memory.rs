// In memory implementation of the traffic ledger.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Keep one record per ip, like the unique index on ip_address.
// - upsert_visit runs under the write lock, standing in for INSERT .. ON CONFLICT.
// - find_by_ip and the visit_count read wait after releasing the lock so select-then-branch
//   and read-modify-write races can be reproduced.
// - Counter on visit_count runs under the write lock.

use crate::modules::traffic::core::order::TrafficOrder;
use crate::modules::traffic::core::ports::TrafficLedger;
use crate::modules::traffic::core::traffic_record::TrafficRecord;
use crate::shared::core::counter::{Counter, CounterCells};
use crate::shared::core::errors::StoreError;
use crate::shared::infrastructure::store::in_memory::Latency;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryTrafficLedger {
    records: RwLock<HashMap<String, TrafficRecord>>,
    latency: Latency,
    is_offline: bool,
}

impl InMemoryTrafficLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.latency.set_ms(delay_ms);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Transient("Traffic store offline".into()));
        }
        Ok(())
    }
}

fn first_visit(ip: &str, seen_at: i64) -> TrafficRecord {
    TrafficRecord {
        id: Uuid::now_v7().to_string(),
        ip_address: ip.to_string(),
        visit_count: 1,
        last_visit: seen_at,
    }
}

fn not_found(ip: &str) -> StoreError {
    StoreError::NotFound { key: ip.to_string() }
}

fn bump(record: &mut TrafficRecord, seen_at: i64) -> TrafficRecord {
    record.visit_count += 1;
    record.last_visit = seen_at;
    record.clone()
}

#[async_trait::async_trait]
impl TrafficLedger for InMemoryTrafficLedger {
    async fn upsert_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError> {
        self.ensure_online()?;
        let mut records = self.records.write().await;
        self.latency.wait().await;
        let record = match records.get_mut(ip) {
            Some(existing) => bump(existing, seen_at),
            None => {
                let created = first_visit(ip, seen_at);
                records.insert(ip.to_string(), created.clone());
                created
            }
        };
        Ok(record)
    }

    async fn find_by_ip(&self, ip: &str) -> Result<Option<TrafficRecord>, StoreError> {
        self.ensure_online()?;
        let found = self.records.read().await.get(ip).cloned();
        self.latency.wait().await;
        Ok(found)
    }

    async fn insert_first_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError> {
        self.ensure_online()?;
        let mut records = self.records.write().await;
        self.latency.wait().await;
        if records.contains_key(ip) {
            return Err(StoreError::DuplicateKey { key: ip.to_string() });
        }
        let created = first_visit(ip, seen_at);
        records.insert(ip.to_string(), created.clone());
        Ok(created)
    }

    async fn touch_last_visit(&self, ip: &str, seen_at: i64) -> Result<TrafficRecord, StoreError> {
        self.ensure_online()?;
        let mut records = self.records.write().await;
        self.latency.wait().await;
        let record = records.get_mut(ip).ok_or_else(|| not_found(ip))?;
        record.last_visit = seen_at;
        Ok(record.clone())
    }

    async fn list(&self, order: TrafficOrder) -> Result<Vec<TrafficRecord>, StoreError> {
        self.ensure_online()?;
        let mut items: Vec<TrafficRecord> = self.records.read().await.values().cloned().collect();
        self.latency.wait().await;
        order.sort(&mut items);
        Ok(items)
    }
}

#[async_trait::async_trait]
impl Counter for InMemoryTrafficLedger {
    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        self.ensure_online()?;
        let mut records = self.records.write().await;
        self.latency.wait().await;
        let record = records.get_mut(key).ok_or_else(|| not_found(key))?;
        record.visit_count += 1;
        Ok(record.visit_count)
    }
}

#[async_trait::async_trait]
impl CounterCells for InMemoryTrafficLedger {
    async fn read(&self, key: &str) -> Result<i64, StoreError> {
        self.ensure_online()?;
        let visit_count = self
            .records
            .read()
            .await
            .get(key)
            .map(|record| record.visit_count)
            .ok_or_else(|| not_found(key))?;
        self.latency.wait().await;
        Ok(visit_count)
    }

    async fn write_if_present(&self, key: &str, value: i64) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut records = self.records.write().await;
        self.latency.wait().await;
        let record = records.get_mut(key).ok_or_else(|| not_found(key))?;
        record.visit_count = value;
        Ok(())
    }
}
