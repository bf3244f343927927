use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct RemoveEntryMutation;

#[Object]
impl RemoveEntryMutation {
    async fn remove_entry(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .remove_entry
            .handle(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
