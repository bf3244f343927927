use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Artificial round trip delay for in memory adapters.
///
/// Adapters wait while holding their write lock for conditional writes (like a row lock)
/// and after releasing the lock for plain reads, which widens read-then-write windows.
#[derive(Debug, Default)]
pub struct Latency {
    delay_ms: AtomicU64,
}

impl Latency {
    pub fn set_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::Relaxed);
    }

    pub async fn wait(&self) {
        let delay_ms = self.delay_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}
