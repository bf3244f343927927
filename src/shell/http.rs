use axum::{
    Extension, Router,
    routing::{delete, get, post},
};

use crate::modules::traffic::use_cases::list_visits::inbound::http as traffic_http;
use crate::modules::waitlist::use_cases::add_waitlist_entry::inbound::http as add_http;
use crate::modules::waitlist::use_cases::increment_like::inbound::http as like_http;
use crate::modules::waitlist::use_cases::list_waitlist_entries::inbound::http as list_http;
use crate::modules::waitlist::use_cases::remove_waitlist_entry::inbound::http as remove_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;
use crate::shell::{dashboard, refresh};

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/waitlist", post(add_http::handle).get(list_http::handle))
        .route("/waitlist/{id}", delete(remove_http::handle))
        .route("/waitlist/{id}/likes", post(like_http::handle))
        .route("/traffic", get(traffic_http::handle))
        .route("/dashboard", get(dashboard::handle))
        .route("/refresh", get(refresh::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}
