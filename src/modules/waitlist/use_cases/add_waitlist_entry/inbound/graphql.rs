use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::waitlist::use_cases::add_waitlist_entry::command::AddWaitlistEntry;
use crate::modules::waitlist::use_cases::list_waitlist_entries::inbound::graphql::GqlWaitlistEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddEntryMutation;

#[Object]
impl AddEntryMutation {
    async fn add_entry(&self, context: &Context<'_>, email: String) -> GqlResult<GqlWaitlistEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = AddWaitlistEntry {
            email,
            requested_at: Utc::now().timestamp_millis(),
        };
        let entry = state
            .add_entry
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry.into())
    }
}
