// What the waitlist use cases need from a backing store.
//
// Boundaries
// - Uniqueness of email is the store's job (unique constraint), not an in-process check.
// - Like counters are exposed through shared::core::counter::{Counter, CounterCells},
//   implemented by the same adapters.

use crate::modules::waitlist::core::entry::{NewWaitlistEntry, WaitlistEntry};
use crate::shared::core::errors::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait WaitlistRepository: Send + Sync {
    /// Fails with DuplicateKey when the email is already in the live set. Nothing is written then.
    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Newest first; entries created in the same millisecond come out latest insertion first.
    async fn list_newest_first(&self) -> Result<Vec<WaitlistEntry>, StoreError>;
}
