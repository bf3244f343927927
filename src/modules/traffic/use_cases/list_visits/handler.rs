// Traffic listing for the presentation layer.
//
// Responsibilities
// - List ledger records in the configured TrafficOrder.
// - record_and_list: record the caller's visit, then list. Both steps are best effort,
//   a failed listing yields an empty list.

use crate::modules::traffic::core::order::TrafficOrder;
use crate::modules::traffic::core::ports::TrafficLedger;
use crate::modules::traffic::core::traffic_record::TrafficRecord;
use crate::modules::traffic::use_cases::record_visit::handler::VisitDeduplicator;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::store::bounded;
use std::sync::Arc;
use std::time::Duration;

pub struct ListVisitsHandler<TLedger>
where
    TLedger: TrafficLedger + ?Sized,
{
    ledger: Arc<TLedger>,
    deduplicator: VisitDeduplicator<TLedger>,
    order: TrafficOrder,
    timeout: Duration,
}

impl<TLedger> ListVisitsHandler<TLedger>
where
    TLedger: TrafficLedger + ?Sized,
{
    pub fn new(
        ledger: Arc<TLedger>,
        deduplicator: VisitDeduplicator<TLedger>,
        order: TrafficOrder,
        timeout: Duration,
    ) -> Self {
        Self {
            ledger,
            deduplicator,
            order,
            timeout,
        }
    }

    pub async fn list(&self) -> Result<Vec<TrafficRecord>, ApplicationError> {
        Ok(bounded(self.timeout, self.ledger.list(self.order)).await?)
    }

    pub async fn record_and_list(&self, ip: &str) -> Vec<TrafficRecord> {
        self.deduplicator.record_best_effort(ip).await;
        self.list().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "traffic listing skipped");
            Vec::new()
        })
    }
}

#[cfg(test)]
mod list_visits_handler_tests {
    use super::*;
    use crate::modules::traffic::adapters::outbound::traffic_in_memory::InMemoryTrafficLedger;
    use crate::modules::traffic::use_cases::record_visit::strategy::DedupStrategy;
    use crate::shared::core::counter::{CounterStrategy, counter_for};
    use rstest::rstest;

    const TIMEOUT: Duration = Duration::from_secs(1);

    fn handler_for(
        ledger: Arc<InMemoryTrafficLedger>,
        order: TrafficOrder,
    ) -> ListVisitsHandler<InMemoryTrafficLedger> {
        let visits = counter_for(ledger.clone(), CounterStrategy::Atomic);
        let deduplicator =
            VisitDeduplicator::new(ledger.clone(), visits, DedupStrategy::Upsert, TIMEOUT);
        ListVisitsHandler::new(ledger, deduplicator, order, TIMEOUT)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_record_the_caller_before_listing() {
        let handler = handler_for(
            Arc::new(InMemoryTrafficLedger::new()),
            TrafficOrder::VisitCount,
        );

        handler.record_and_list("10.0.0.1").await;
        handler.record_and_list("10.0.0.2").await;
        let records = handler.record_and_list("10.0.0.1").await;

        let seen: Vec<(&str, i64)> = records
            .iter()
            .map(|record| (record.ip_address.as_str(), record.visit_count))
            .collect();
        assert_eq!(seen, vec![("10.0.0.1", 2), ("10.0.0.2", 1)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_list_when_the_store_is_offline() {
        let mut ledger = InMemoryTrafficLedger::new();
        ledger.toggle_offline();
        let handler = handler_for(Arc::new(ledger), TrafficOrder::default());

        assert!(handler.record_and_list("10.0.0.1").await.is_empty());
        assert!(handler.list().await.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_list_when_the_store_is_slow() {
        let ledger = Arc::new(InMemoryTrafficLedger::new());
        ledger.set_delay_ms(100);
        let visits = counter_for(ledger.clone(), CounterStrategy::Atomic);
        let deduplicator = VisitDeduplicator::new(
            ledger.clone(),
            visits,
            DedupStrategy::Upsert,
            Duration::from_millis(5),
        );
        let handler = ListVisitsHandler::new(
            ledger,
            deduplicator,
            TrafficOrder::default(),
            Duration::from_millis(5),
        );

        assert!(handler.record_and_list("10.0.0.1").await.is_empty());
    }
}
