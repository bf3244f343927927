// Visit deduplicator.
//
// Responsibilities
// - Resolve the client ip to its ledger record and count the visit, per DedupStrategy.
// - SelectThenBranch counts a known ip through the configured Counter on visit_count,
//   so the counter strategy (atomic or read-modify-write) applies to visits too.
// - Bound each store call by the caller's timeout.
// - record_best_effort: the call site for page renders. Failures are logged and dropped.

use crate::modules::traffic::core::ports::TrafficLedger;
use crate::modules::traffic::core::traffic_record::TrafficRecord;
use crate::modules::traffic::use_cases::record_visit::strategy::DedupStrategy;
use crate::shared::core::counter::Counter;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::store::bounded;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

pub struct VisitDeduplicator<TLedger>
where
    TLedger: TrafficLedger + ?Sized,
{
    ledger: Arc<TLedger>,
    visits: Arc<dyn Counter>,
    strategy: DedupStrategy,
    timeout: Duration,
}

impl<TLedger> VisitDeduplicator<TLedger>
where
    TLedger: TrafficLedger + ?Sized,
{
    pub fn new(
        ledger: Arc<TLedger>,
        visits: Arc<dyn Counter>,
        strategy: DedupStrategy,
        timeout: Duration,
    ) -> Self {
        Self {
            ledger,
            visits,
            strategy,
            timeout,
        }
    }

    pub async fn record_visit(&self, ip: &str) -> Result<TrafficRecord, ApplicationError> {
        let seen_at = Utc::now().timestamp_millis();
        let record = match self.strategy {
            DedupStrategy::Upsert => {
                bounded(self.timeout, self.ledger.upsert_visit(ip, seen_at)).await?
            }
            DedupStrategy::SelectThenBranch => {
                match bounded(self.timeout, self.ledger.find_by_ip(ip)).await? {
                    Some(_) => {
                        bounded(self.timeout, self.visits.increment(ip)).await?;
                        bounded(self.timeout, self.ledger.touch_last_visit(ip, seen_at)).await?
                    }
                    None => {
                        bounded(self.timeout, self.ledger.insert_first_visit(ip, seen_at)).await?
                    }
                }
            }
        };
        tracing::debug!(ip, visit_count = record.visit_count, "visit recorded");
        Ok(record)
    }

    pub async fn record_best_effort(&self, ip: &str) -> Option<TrafficRecord> {
        match self.record_visit(ip).await {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::warn!(ip, %error, "traffic update skipped");
                None
            }
        }
    }
}
