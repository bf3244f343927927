// Snapshot read of the waitlist, newest first.

use crate::modules::waitlist::core::entry::WaitlistEntry;
use crate::modules::waitlist::core::ports::WaitlistRepository;
use crate::shared::core::errors::{ApplicationError, report_failure};
use crate::shared::infrastructure::store::bounded;
use std::sync::Arc;
use std::time::Duration;

pub struct ListWaitlistEntriesHandler<TRepository>
where
    TRepository: WaitlistRepository + ?Sized,
{
    repository: Arc<TRepository>,
    timeout: Duration,
}

impl<TRepository> ListWaitlistEntriesHandler<TRepository>
where
    TRepository: WaitlistRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    pub async fn handle(&self) -> Result<Vec<WaitlistEntry>, ApplicationError> {
        bounded(self.timeout, self.repository.list_newest_first())
            .await
            .map_err(ApplicationError::from)
            .inspect_err(|error| report_failure("list_entries", error))
    }
}
