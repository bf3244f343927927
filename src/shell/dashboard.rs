// One page worth of data: the caller's visit is recorded, then entries and traffic
// are read for rendering. Traffic failures never fail the page.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::traffic::core::traffic_record::TrafficRecord;
use crate::modules::waitlist::core::entry::WaitlistEntry;
use crate::shell::client_ip::ClientIp;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct Dashboard {
    pub client_ip: String,
    pub entries: Vec<WaitlistEntry>,
    pub traffic: Vec<TrafficRecord>,
}

pub async fn handle(State(state): State<AppState>, ClientIp(ip): ClientIp) -> impl IntoResponse {
    let traffic = state.visits.record_and_list(&ip).await;
    match state.list_entries.handle().await {
        Ok(entries) => Json(Dashboard {
            client_ip: ip,
            entries,
            traffic,
        })
        .into_response(),
        Err(error) => error.into_response(),
    }
}
