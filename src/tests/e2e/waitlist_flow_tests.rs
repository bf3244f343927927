use crate::shared::core::errors::{ApplicationError, StoreError};
use crate::shared::infrastructure::refresh::RefreshSignal;
use crate::tests::fixtures::commands::AddWaitlistEntryBuilder;
use crate::tests::fixtures::state::{make_offline_state, make_test_state};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn adds_likes_and_removes_an_entry() {
    let state = make_test_state();
    let mut refreshes = state.notifier.subscribe();

    let ada = state
        .add_entry
        .handle(AddWaitlistEntryBuilder::new().email("ada@x.io").build())
        .await
        .unwrap();
    let listed = state.list_entries.handle().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].email, "ada@x.io");
    assert_eq!(listed[0].likes, 0);

    assert_eq!(state.increment_like.handle(&ada.id).await.unwrap(), 1);
    assert_eq!(state.increment_like.handle(&ada.id).await.unwrap(), 2);

    state.remove_entry.handle(&ada.id).await.unwrap();
    assert!(state.list_entries.handle().await.unwrap().is_empty());

    let result = state.increment_like.handle(&ada.id).await;
    assert!(matches!(
        result,
        Err(ApplicationError::Store(StoreError::NotFound { .. }))
    ));

    let mut signals = Vec::new();
    while let Ok(signal) = refreshes.try_recv() {
        signals.push(signal);
    }
    assert_eq!(
        signals,
        vec![
            RefreshSignal::EntryAdded,
            RefreshSignal::LikeIncremented,
            RefreshSignal::LikeIncremented,
            RefreshSignal::EntryRemoved,
        ]
    );
}

#[tokio::test]
async fn keeps_the_list_unchanged_after_rejected_calls() {
    let state = make_test_state();
    state
        .add_entry
        .handle(AddWaitlistEntryBuilder::new().build())
        .await
        .unwrap();

    assert!(
        state
            .add_entry
            .handle(AddWaitlistEntryBuilder::new().requested_at(1).build())
            .await
            .is_err()
    );
    assert!(
        state
            .add_entry
            .handle(AddWaitlistEntryBuilder::new().email("bad address").build())
            .await
            .is_err()
    );
    assert!(state.remove_entry.handle("unknown").await.is_err());

    let listed = state.list_entries.handle().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].likes, 0);
}

#[tokio::test]
async fn serves_the_waitlist_over_http() {
    let app = crate::shell::http::router(make_test_state());

    let created = app
        .clone()
        .oneshot(
            Request::post("/waitlist")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"email":"ada@x.io"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let bytes = created.into_body().collect().await.unwrap().to_bytes();
    let entry: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let id = entry["id"].as_str().unwrap();

    let liked = app
        .clone()
        .oneshot(
            Request::post(format!("/waitlist/{id}/likes"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(liked.status(), StatusCode::OK);

    let removed = app
        .clone()
        .oneshot(
            Request::delete(format!("/waitlist/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);

    let listed = app
        .oneshot(Request::get("/waitlist").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = listed.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&bytes).unwrap(),
        serde_json::json!([])
    );
}

#[tokio::test]
async fn reports_an_offline_store_without_panicking() {
    let state = make_offline_state();

    let result = state
        .add_entry
        .handle(AddWaitlistEntryBuilder::new().build())
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Store(StoreError::Transient(_)))
    ));
    assert!(state.list_entries.handle().await.is_err());
}

#[tokio::test]
async fn counts_every_concurrent_like_once() {
    let state = make_test_state();
    let entry = state
        .add_entry
        .handle(AddWaitlistEntryBuilder::new().build())
        .await
        .unwrap();

    let mut likes = tokio::task::JoinSet::new();
    for _ in 0..30 {
        let handler = state.increment_like.clone();
        let id = entry.id.clone();
        likes.spawn(async move { handler.handle(&id).await });
    }
    while let Some(joined) = likes.join_next().await {
        joined.unwrap().unwrap();
    }

    let listed = state.list_entries.handle().await.unwrap();
    assert_eq!(listed[0].likes, 30);
}
