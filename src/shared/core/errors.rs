// Error taxonomy shared by every store port and use case handler.
//
// Purpose
// - StoreError: what a backing store (in memory or PostgreSQL) can report.
// - ApplicationError: what a use case handler reports to the inbound adapters.
//
// Boundaries
// - Nothing here is fatal. Inbound adapters turn these into status codes or messages.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    #[error("not found: {key}")]
    NotFound { key: String },

    #[error("store operation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("transient store failure: {0}")]
    Transient(String),

    #[error("store error: {0}")]
    Unknown(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Timeouts and connection level failures; retrying later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Timeout(_) | StoreError::Transient(_))
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    /// Rejections caused by the caller's input or a racing writer, as opposed to infrastructure.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            ApplicationError::Validation(_)
                | ApplicationError::Store(StoreError::DuplicateKey { .. })
                | ApplicationError::Store(StoreError::NotFound { .. })
        )
    }
}

pub fn report_failure(operation: &str, error: &ApplicationError) {
    if error.is_expected() {
        tracing::warn!(operation, %error, "request rejected");
    } else {
        tracing::error!(operation, %error, "store failure");
    }
}
