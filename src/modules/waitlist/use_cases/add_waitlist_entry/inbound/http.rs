use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::waitlist::use_cases::add_waitlist_entry::command::AddWaitlistEntry;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddWaitlistEntryBody {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddWaitlistEntryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddWaitlistEntry {
        email: body.email,
        requested_at: Utc::now().timestamp_millis(),
    };

    match state.add_entry.handle(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => error.into_response(),
    }
}
