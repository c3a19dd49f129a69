//! Request Store Error Types
//!
//! Store-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

/// Request store result type alias
pub type RequestResult<T> = Result<T, RequestError>;

/// Message shown for every storage-side failure
const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit request. Please try again.";

#[derive(Debug, Error)]
pub enum RequestError {
    /// Bad or missing form field
    #[error("{0}")]
    Validation(String),

    /// Stored list is not a JSON array of access requests
    #[error("Stored access requests are unreadable: {0}")]
    Corrupted(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::Validation(_) => ErrorKind::BadRequest,
            RequestError::Storage(StorageError::QuotaExceeded { .. }) => {
                ErrorKind::InsufficientStorage
            }
            RequestError::Corrupted(_) | RequestError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Text safe to show the visitor. Storage details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Validation(msg) => msg.clone(),
            _ => SUBMIT_FAILED_MESSAGE.to_string(),
        }
    }

    /// Convert to AppError, pointing server-side failures at `fallback_contact`
    pub fn to_app_error(&self, fallback_contact: Option<&str>) -> AppError {
        let err = AppError::new(self.kind(), self.user_message());
        match fallback_contact {
            Some(url) if self.kind().is_server_error() => {
                err.with_action(format!("Reach out via {url}"))
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            RequestError::Validation(msg) => {
                tracing::debug!(message = %msg, "Access request rejected");
            }
            RequestError::Corrupted(e) => {
                tracing::error!(error = %e, "Stored access requests are corrupted");
            }
            RequestError::Storage(e) => {
                tracing::error!(error = %e, "Access request storage failed");
            }
        }
    }
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        err.to_app_error(None)
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error(None).into_response()
    }
}
