// Remove waitlist entry command handler.
//
// - Delete by id within the caller's timeout, then emit a refresh signal.
// - An unknown id comes back as NotFound; callers may ignore it.

use crate::modules::waitlist::core::ports::WaitlistRepository;
use crate::shared::core::errors::{ApplicationError, report_failure};
use crate::shared::infrastructure::refresh::{RefreshNotifier, RefreshSignal};
use crate::shared::infrastructure::store::bounded;
use std::sync::Arc;
use std::time::Duration;

pub struct RemoveWaitlistEntryHandler<TRepository>
where
    TRepository: WaitlistRepository + ?Sized,
{
    repository: Arc<TRepository>,
    notifier: RefreshNotifier,
    timeout: Duration,
}

impl<TRepository> RemoveWaitlistEntryHandler<TRepository>
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

    pub async fn handle(&self, id: &str) -> Result<(), ApplicationError> {
        bounded(self.timeout, self.repository.delete(id))
            .await
            .map_err(ApplicationError::from)
            .inspect_err(|error| report_failure("remove_entry", error))?;
        tracing::debug!(id, "waitlist entry removed");
        self.notifier.notify(RefreshSignal::EntryRemoved);
        Ok(())
    }
}

#[cfg(test)]
mod remove_waitlist_entry_handler_tests {
    use super::*;
    use crate::modules::waitlist::adapters::outbound::waitlist_in_memory::InMemoryWaitlist;
    use crate::modules::waitlist::core::email::EmailAddress;
    use crate::modules::waitlist::core::entry::{NewWaitlistEntry, WaitlistEntry};
    use crate::shared::core::errors::StoreError;
    use rstest::{fixture, rstest};

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[fixture]
    async fn before_each() -> (Arc<InMemoryWaitlist>, WaitlistEntry) {
        let store = Arc::new(InMemoryWaitlist::new());
        let entry = store
            .insert(NewWaitlistEntry {
                email: EmailAddress::parse("a@x.com").unwrap(),
                created_at: 1_700_000_000_000,
            })
            .await
            .unwrap();
        (store, entry)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_the_entry_and_signal_a_refresh(
        #[future] before_each: (Arc<InMemoryWaitlist>, WaitlistEntry),
    ) {
        let (store, entry) = before_each.await;
        let notifier = RefreshNotifier::default();
        let mut refreshes = notifier.subscribe();
        let handler = RemoveWaitlistEntryHandler::new(store.clone(), notifier, TIMEOUT);

        handler.handle(&entry.id).await.expect("remove failed");

        assert!(store.list_newest_first().await.unwrap().is_empty());
        assert_eq!(refreshes.try_recv().unwrap(), RefreshSignal::EntryRemoved);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_not_found_and_keep_the_live_set(
        #[future] before_each: (Arc<InMemoryWaitlist>, WaitlistEntry),
    ) {
        let (store, _) = before_each.await;
        let notifier = RefreshNotifier::default();
        let mut refreshes = notifier.subscribe();
        let handler = RemoveWaitlistEntryHandler::new(store.clone(), notifier, TIMEOUT);

        let result = handler.handle("unknown-id").await;

        assert!(matches!(
            result,
            Err(ApplicationError::Store(StoreError::NotFound { .. }))
        ));
        assert_eq!(store.list_newest_first().await.unwrap().len(), 1);
        assert!(refreshes.try_recv().is_err());
    }
}
