// Add waitlist entry command handler.
//
// Responsibilities
// - Run the pure decision, then insert within the caller's timeout.
// - Emit a refresh signal once the entry is stored.
// - Log failures; hand them back so the inbound adapter can show a message.

use crate::modules::waitlist::core::entry::WaitlistEntry;
use crate::modules::waitlist::core::ports::WaitlistRepository;
use crate::modules::waitlist::use_cases::add_waitlist_entry::command::AddWaitlistEntry;
use crate::modules::waitlist::use_cases::add_waitlist_entry::decide::decide_add;
use crate::shared::core::errors::{ApplicationError, report_failure};
use crate::shared::infrastructure::refresh::{RefreshNotifier, RefreshSignal};
use crate::shared::infrastructure::store::bounded;
use std::sync::Arc;
use std::time::Duration;

pub struct AddWaitlistEntryHandler<TRepository>
where
    TRepository: WaitlistRepository + ?Sized,
{
    repository: Arc<TRepository>,
    notifier: RefreshNotifier,
    timeout: Duration,
}

impl<TRepository> AddWaitlistEntryHandler<TRepository>
where
    TRepository: WaitlistRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>, notifier: RefreshNotifier, timeout: Duration) -> Self {
        Self {
            repository,
            notifier,
            timeout,
        }
    }

    pub async fn handle(&self, command: AddWaitlistEntry) -> Result<WaitlistEntry, ApplicationError> {
        self.add(command)
            .await
            .inspect_err(|error| report_failure("add_entry", error))
    }

    async fn add(&self, command: AddWaitlistEntry) -> Result<WaitlistEntry, ApplicationError> {
        let new_entry =
            decide_add(command).map_err(|reason| ApplicationError::Validation(reason.to_string()))?;
        let entry = bounded(self.timeout, self.repository.insert(new_entry)).await?;
        tracing::debug!(id = %entry.id, "waitlist entry added");
        self.notifier.notify(RefreshSignal::EntryAdded);
        Ok(entry)
    }
}
