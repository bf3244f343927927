use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::client_ip::ClientIp;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, ClientIp(ip): ClientIp) -> impl IntoResponse {
    Json(state.visits.record_and_list(&ip).await)
}
