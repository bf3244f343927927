// Counters attached to a stored record.
//
// Purpose
// - Counter: increment a named integer and return the new value, without losing updates.
// - CounterCells: the plain read and conditional write primitives a store exposes.
// - ReadModifyWriteCounter: the fallback built from CounterCells.
//
// Strategies
// - Atomic (default): the store implements Counter itself with one conditional write,
//   for example `UPDATE .. SET likes = likes + 1 WHERE id = $1 RETURNING likes`.
// - ReadModifyWrite: read, add one, write back if the key still exists. Two concurrent
//   callers can read the same base value, so N concurrent increments land anywhere in
//   [initial + 1, initial + N]. Kept for parity with stores that lack a native increment.

use crate::shared::core::errors::StoreError;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

#[async_trait]
pub trait Counter: Send + Sync {
    async fn increment(&self, key: &str) -> Result<i64, StoreError>;
}

#[async_trait]
pub trait CounterCells: Send + Sync {
    async fn read(&self, key: &str) -> Result<i64, StoreError>;

    /// Overwrite the value, failing with NotFound instead of creating the key.
    async fn write_if_present(&self, key: &str, value: i64) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterStrategy {
    #[default]
    Atomic,
    ReadModifyWrite,
}

pub struct ReadModifyWriteCounter<TCells>
where
    TCells: CounterCells + ?Sized,
{
    cells: Arc<TCells>,
}

impl<TCells> ReadModifyWriteCounter<TCells>
where
    TCells: CounterCells + ?Sized,
{
    pub fn new(cells: Arc<TCells>) -> Self {
        Self { cells }
    }
}

#[async_trait]
impl<TCells> Counter for ReadModifyWriteCounter<TCells>
where
    TCells: CounterCells + ?Sized,
{
    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        let current = self.cells.read(key).await?;
        let next = current + 1;
        self.cells.write_if_present(key, next).await?;
        Ok(next)
    }
}

/// Pick the counter for a store that supports both strategies.
pub fn counter_for<TStore>(store: Arc<TStore>, strategy: CounterStrategy) -> Arc<dyn Counter>
where
    TStore: Counter + CounterCells + 'static,
{
    match strategy {
        CounterStrategy::Atomic => store,
        CounterStrategy::ReadModifyWrite => Arc::new(ReadModifyWriteCounter::new(store)),
    }
}
