use crate::modules::traffic::adapters::outbound::traffic_in_memory::InMemoryTrafficLedger;
use crate::modules::traffic::adapters::outbound::traffic_postgres::PgTrafficLedger;
use crate::modules::traffic::core::ports::TrafficLedger;
use crate::modules::traffic::use_cases::list_visits::handler::ListVisitsHandler;
use crate::modules::traffic::use_cases::record_visit::handler::VisitDeduplicator;
use crate::modules::waitlist::adapters::outbound::waitlist_in_memory::InMemoryWaitlist;
use crate::modules::waitlist::adapters::outbound::waitlist_postgres::PgWaitlist;
use crate::modules::waitlist::core::ports::WaitlistRepository;
use crate::modules::waitlist::use_cases::add_waitlist_entry::handler::AddWaitlistEntryHandler;
use crate::modules::waitlist::use_cases::increment_like::handler::IncrementLikeHandler;
use crate::modules::waitlist::use_cases::list_waitlist_entries::handler::ListWaitlistEntriesHandler;
use crate::modules::waitlist::use_cases::remove_waitlist_entry::handler::RemoveWaitlistEntryHandler;
use crate::shared::core::counter::{Counter, counter_for};
use crate::shared::core::errors::StoreError;
use crate::shared::infrastructure::refresh::RefreshNotifier;
use crate::shared::infrastructure::store::postgres::{connect, ensure_schema};
use crate::shell::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub add_entry: Arc<AddWaitlistEntryHandler<dyn WaitlistRepository>>,
    pub remove_entry: Arc<RemoveWaitlistEntryHandler<dyn WaitlistRepository>>,
    pub increment_like: Arc<IncrementLikeHandler<dyn Counter>>,
    pub list_entries: Arc<ListWaitlistEntriesHandler<dyn WaitlistRepository>>,
    pub visits: Arc<ListVisitsHandler<dyn TrafficLedger>>,
    pub notifier: RefreshNotifier,
}

impl AppState {
    pub fn in_memory(config: &Config) -> Self {
        let waitlist = Arc::new(InMemoryWaitlist::new());
        let likes = counter_for(waitlist.clone(), config.counter_strategy);
        let ledger = Arc::new(InMemoryTrafficLedger::new());
        let visits = counter_for(ledger.clone(), config.counter_strategy);
        Self::from_stores(waitlist, likes, ledger, visits, config)
    }

    pub async fn postgres(config: &Config, database_url: &str) -> Result<Self, StoreError> {
        let pool = connect(database_url, config.store_timeout()).await?;
        ensure_schema(&pool).await?;
        let waitlist = Arc::new(PgWaitlist::new(pool.clone()));
        let likes = counter_for(waitlist.clone(), config.counter_strategy);
        let ledger = Arc::new(PgTrafficLedger::new(pool));
        let visits = counter_for(ledger.clone(), config.counter_strategy);
        Ok(Self::from_stores(waitlist, likes, ledger, visits, config))
    }

    pub fn from_stores(
        waitlist: Arc<dyn WaitlistRepository>,
        likes: Arc<dyn Counter>,
        ledger: Arc<dyn TrafficLedger>,
        visits: Arc<dyn Counter>,
        config: &Config,
    ) -> Self {
        let timeout = config.store_timeout();
        let notifier = RefreshNotifier::new(config.refresh_capacity);
        let deduplicator =
            VisitDeduplicator::new(ledger.clone(), visits, config.dedup_strategy, timeout);
        Self {
            add_entry: Arc::new(AddWaitlistEntryHandler::new(
                waitlist.clone(),
                notifier.clone(),
                timeout,
            )),
            remove_entry: Arc::new(RemoveWaitlistEntryHandler::new(
                waitlist.clone(),
                notifier.clone(),
                timeout,
            )),
            increment_like: Arc::new(IncrementLikeHandler::new(likes, notifier.clone(), timeout)),
            list_entries: Arc::new(ListWaitlistEntriesHandler::new(waitlist, timeout)),
            visits: Arc::new(ListVisitsHandler::new(
                ledger,
                deduplicator,
                config.traffic_order,
                timeout,
            )),
            notifier,
        }
    }
}
