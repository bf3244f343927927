use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::traffic::use_cases::list_visits::inbound::graphql::TrafficQuery;
use crate::modules::waitlist::use_cases::add_waitlist_entry::inbound::graphql::AddEntryMutation;
use crate::modules::waitlist::use_cases::increment_like::inbound::graphql::IncrementLikeMutation;
use crate::modules::waitlist::use_cases::list_waitlist_entries::inbound::graphql::WaitlistQuery;
use crate::modules::waitlist::use_cases::remove_waitlist_entry::inbound::graphql::RemoveEntryMutation;
use crate::shell::client_ip::ClientIp;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(WaitlistQuery, TrafficQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AddEntryMutation, RemoveEntryMutation, IncrementLikeMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    client_ip: ClientIp,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(client_ip)).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
