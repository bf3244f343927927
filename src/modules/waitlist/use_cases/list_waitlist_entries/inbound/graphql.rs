use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::waitlist::core::entry::WaitlistEntry;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlWaitlistEntry {
    pub id: ID,
    pub email: String,
    pub likes: i64,
    pub created_at: i64,
}

impl From<WaitlistEntry> for GqlWaitlistEntry {
    fn from(v: WaitlistEntry) -> Self {
        Self {
            id: ID(v.id),
            email: v.email,
            likes: v.likes,
            created_at: v.created_at,
        }
    }
}

#[derive(Default)]
pub struct WaitlistQuery;

#[Object]
impl WaitlistQuery {
    async fn entries(&self, context: &Context<'_>) -> GqlResult<Vec<GqlWaitlistEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .list_entries
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
