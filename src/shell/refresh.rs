// Long poll for refresh signals. A client re-reads the waitlist after each signal.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

use crate::shared::infrastructure::refresh::RefreshSignal;
use crate::shell::state::AppState;

const DEFAULT_WAIT_MS: u64 = 25_000;
const MAX_WAIT_MS: u64 = 60_000;

#[derive(Deserialize)]
pub struct RefreshParams {
    pub wait_ms: Option<u64>,
}

#[derive(Serialize)]
pub struct RefreshBody {
    pub signal: RefreshSignal,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<RefreshParams>,
) -> impl IntoResponse {
    let wait = Duration::from_millis(params.wait_ms.unwrap_or(DEFAULT_WAIT_MS).min(MAX_WAIT_MS));
    let mut receiver = state.notifier.subscribe();
    let next = async {
        loop {
            match receiver.recv().await {
                Ok(signal) => return Some(signal),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "refresh subscriber lagged")
                }
                Err(RecvError::Closed) => return None,
            }
        }
    };
    match tokio::time::timeout(wait, next).await {
        Ok(Some(signal)) => Json(RefreshBody { signal }).into_response(),
        Ok(None) | Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}
