// Increment like command handler.
//
// - Delegates to whichever Counter the shell wired (atomic by default).
// - A racing remove shows up as NotFound, which is not fatal.

use crate::shared::core::counter::Counter;
use crate::shared::core::errors::{ApplicationError, report_failure};
use crate::shared::infrastructure::refresh::{RefreshNotifier, RefreshSignal};
use crate::shared::infrastructure::store::bounded;
use std::sync::Arc;
use std::time::Duration;

pub struct IncrementLikeHandler<TCounter>
where
    TCounter: Counter + ?Sized,
{
    counter: Arc<TCounter>,
    notifier: RefreshNotifier,
    timeout: Duration,
}

impl<TCounter> IncrementLikeHandler<TCounter>
where
    TCounter: Counter + ?Sized,
{
    pub fn new(counter: Arc<TCounter>, notifier: RefreshNotifier, timeout: Duration) -> Self {
        Self {
            counter,
            notifier,
            timeout,
        }
    }

    /// Returns the like count after this increment.
    pub async fn handle(&self, id: &str) -> Result<i64, ApplicationError> {
        let likes = bounded(self.timeout, self.counter.increment(id))
            .await
            .map_err(ApplicationError::from)
            .inspect_err(|error| report_failure("increment_like", error))?;
        tracing::debug!(id, likes, "like counted");
        self.notifier.notify(RefreshSignal::LikeIncremented);
        Ok(likes)
    }
}
