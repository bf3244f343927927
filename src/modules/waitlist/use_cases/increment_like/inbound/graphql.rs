use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct IncrementLikeMutation;

#[Object]
impl IncrementLikeMutation {
    /// Returns the like count after the increment.
    async fn increment_like(&self, context: &Context<'_>, id: ID) -> GqlResult<i64> {
        let state = context.data_unchecked::<AppState>();
        state
            .increment_like
            .handle(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
