use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.remove_entry.handle(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod remove_waitlist_entry_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use chrono::Utc;
    use tower::ServiceExt;

    use crate::modules::waitlist::use_cases::add_waitlist_entry::command::AddWaitlistEntry;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/waitlist/{id}", delete(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_204_when_the_entry_is_removed() {
        let state = make_test_state();
        let entry = state
            .add_entry
            .handle(AddWaitlistEntry {
                email: "a@x.com".into(),
                requested_at: Utc::now().timestamp_millis(),
            })
            .await
            .unwrap();

        let response = app(state.clone())
            .oneshot(
                Request::delete(format!("/waitlist/{}", entry.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(state.list_entries.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_id() {
        let response = app(make_test_state())
            .oneshot(
                Request::delete("/waitlist/unknown-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
