use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::errors::{ApplicationError, StoreError};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Store(StoreError::DuplicateKey { .. }) => StatusCode::CONFLICT,
        ApplicationError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ApplicationError::Store(StoreError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
        ApplicationError::Store(StoreError::Transient(_)) => StatusCode::SERVICE_UNAVAILABLE,
        ApplicationError::Store(StoreError::Unknown(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// Infrastructure details stay in the logs; callers only get the caller-facing part.
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let message = if self.is_expected() {
            self.to_string()
        } else {
            status
                .canonical_reason()
                .unwrap_or("store unavailable")
                .to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
