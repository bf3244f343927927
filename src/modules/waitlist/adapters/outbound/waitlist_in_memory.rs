// In memory implementation of the waitlist ports.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Keep entries in insertion order and reject duplicate emails like a unique index.
// - Increment likes atomically under the write lock (Counter), and expose plain
//   read and conditional write (CounterCells) for the read-modify-write fallback.

use crate::modules::waitlist::core::entry::{NewWaitlistEntry, WaitlistEntry};
use crate::modules::waitlist::core::ports::WaitlistRepository;
use crate::shared::core::counter::{Counter, CounterCells};
use crate::shared::core::errors::StoreError;
use crate::shared::infrastructure::store::in_memory::Latency;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryWaitlist {
    rows: RwLock<Vec<WaitlistEntry>>,
    latency: Latency,
    is_offline: bool,
}

impl InMemoryWaitlist {
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
            return Err(StoreError::Transient("Waitlist store offline".into()));
        }
        Ok(())
    }
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound { key: id.to_string() }
}

#[async_trait::async_trait]
impl WaitlistRepository for InMemoryWaitlist {
    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        self.latency.wait().await;
        if rows.iter().any(|row| row.email == entry.email.as_str()) {
            return Err(StoreError::DuplicateKey {
                key: entry.email.into_inner(),
            });
        }
        let stored = WaitlistEntry {
            id: Uuid::now_v7().to_string(),
            email: entry.email.into_inner(),
            likes: 0,
            created_at: entry.created_at,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        self.latency.wait().await;
        let position = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or_else(|| not_found(id))?;
        rows.remove(position);
        Ok(())
    }

    async fn list_newest_first(&self) -> Result<Vec<WaitlistEntry>, StoreError> {
        self.ensure_online()?;
        let mut items: Vec<(usize, WaitlistEntry)> =
            self.rows.read().await.iter().cloned().enumerate().collect();
        self.latency.wait().await;
        items.sort_by(|(left_seq, left), (right_seq, right)| {
            right
                .created_at
                .cmp(&left.created_at)
                .then(right_seq.cmp(left_seq))
        });
        Ok(items.into_iter().map(|(_, entry)| entry).collect())
    }
}

#[async_trait::async_trait]
impl Counter for InMemoryWaitlist {
    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        self.latency.wait().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == key)
            .ok_or_else(|| not_found(key))?;
        row.likes += 1;
        Ok(row.likes)
    }
}

#[async_trait::async_trait]
impl CounterCells for InMemoryWaitlist {
    async fn read(&self, key: &str) -> Result<i64, StoreError> {
        self.ensure_online()?;
        let likes = self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.id == key)
            .map(|row| row.likes)
            .ok_or_else(|| not_found(key))?;
        self.latency.wait().await;
        Ok(likes)
    }

    async fn write_if_present(&self, key: &str, value: i64) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        self.latency.wait().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == key)
            .ok_or_else(|| not_found(key))?;
        row.likes = value;
        Ok(())
    }
}
