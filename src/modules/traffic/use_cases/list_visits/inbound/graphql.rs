use async_graphql::{Context, ID, Object};

use crate::modules::traffic::core::traffic_record::TrafficRecord;
use crate::shell::client_ip::ClientIp;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTrafficRecord {
    pub id: ID,
    pub ip_address: String,
    pub visit_count: i64,
    pub last_visit: i64,
}

impl From<TrafficRecord> for GqlTrafficRecord {
    fn from(v: TrafficRecord) -> Self {
        Self {
            id: ID(v.id),
            ip_address: v.ip_address,
            visit_count: v.visit_count,
            last_visit: v.last_visit,
        }
    }
}

#[derive(Default)]
pub struct TrafficQuery;

#[Object]
impl TrafficQuery {
    /// Records the caller's visit, then lists all visitors. Never fails.
    async fn traffic(&self, context: &Context<'_>) -> Vec<GqlTrafficRecord> {
        let state = context.data_unchecked::<AppState>();
        let ip = context
            .data_opt::<ClientIp>()
            .map(|client| client.0.clone())
            .unwrap_or_else(|| ClientIp::localhost().0);
        state
            .visits
            .record_and_list(&ip)
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
