// Store plumbing shared by the waitlist and traffic adapters.
//
// Responsibilities
// - Bound every store call by the caller's timeout and report it as StoreError::Timeout.
// - in_memory: latency injection used by the in memory adapters.
// - postgres: pool, schema bootstrap and sqlx error mapping.

pub mod in_memory;
pub mod postgres;

use crate::shared::core::errors::StoreError;
use std::future::Future;
use std::time::Duration;

pub async fn bounded<T, TOperation>(timeout: Duration, operation: TOperation) -> Result<T, StoreError>
where
    TOperation: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(timeout, operation)
        .await
        .map_err(|_| StoreError::Timeout(timeout))?
}
