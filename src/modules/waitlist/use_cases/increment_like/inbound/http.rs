use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct IncrementLikeResponse {
    pub id: String,
    pub likes: i64,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.increment_like.handle(&id).await {
        Ok(likes) => Json(IncrementLikeResponse { id, likes }).into_response(),
        Err(error) => error.into_response(),
    }
}
