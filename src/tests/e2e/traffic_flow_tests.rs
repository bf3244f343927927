use crate::modules::traffic::core::order::TrafficOrder;
use crate::modules::traffic::use_cases::record_visit::strategy::DedupStrategy;
use crate::shared::core::counter::CounterStrategy;
use crate::shell::config::Config;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::{make_offline_state, make_test_state, test_config};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get_json(app: axum::Router, uri: &str, forwarded_for: &str) -> serde_json::Value {
    let response = app
        .oneshot(
            Request::get(uri)
                .header("x-forwarded-for", forwarded_for)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn counts_visits_per_client_ip() {
    let state = make_test_state();

    state.visits.record_and_list("10.0.0.1").await;
    state.visits.record_and_list("10.0.0.2").await;
    let records = state.visits.record_and_list("10.0.0.1").await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].ip_address, "10.0.0.1");
    assert_eq!(records[0].visit_count, 2);
    assert_eq!(records[1].visit_count, 1);
}

#[tokio::test]
async fn orders_traffic_by_last_visit_when_configured() {
    let state = AppState::in_memory(&Config {
        traffic_order: TrafficOrder::LastVisit,
        ..test_config()
    });

    state.visits.record_and_list("10.0.0.1").await;
    state.visits.record_and_list("10.0.0.1").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let records = state.visits.record_and_list("10.0.0.2").await;

    assert_eq!(records[0].ip_address, "10.0.0.2");
    assert_eq!(records[1].visit_count, 2);
}

#[tokio::test]
async fn counts_repeat_visits_through_the_configured_counter() {
    let state = AppState::in_memory(&Config {
        counter_strategy: CounterStrategy::ReadModifyWrite,
        dedup_strategy: DedupStrategy::SelectThenBranch,
        ..test_config()
    });

    state.visits.record_and_list("10.0.0.1").await;
    state.visits.record_and_list("10.0.0.1").await;
    let records = state.visits.record_and_list("10.0.0.1").await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].visit_count, 3);
}

#[tokio::test]
async fn shares_one_ledger_between_rest_dashboard_and_graphql() {
    let state = make_test_state();
    let app = crate::shell::http::router(state.clone());

    get_json(app.clone(), "/traffic", "203.0.113.9").await;
    let dashboard = get_json(app, "/dashboard", "203.0.113.9").await;
    assert_eq!(dashboard["client_ip"], "203.0.113.9");
    assert_eq!(dashboard["traffic"][0]["visit_count"], 2);

    let schema = crate::shell::graphql::build_schema(state);
    let response = schema
        .execute(
            async_graphql::Request::new("{ traffic { visitCount } }")
                .data(crate::shell::client_ip::ClientIp("203.0.113.9".into())),
        )
        .await;
    assert_eq!(
        response.data.into_json().unwrap()["traffic"][0]["visitCount"],
        3
    );
}

#[tokio::test]
async fn absorbs_traffic_store_failures() {
    let state = make_offline_state();

    let records = state.visits.record_and_list("10.0.0.1").await;

    assert!(records.is_empty());
}
