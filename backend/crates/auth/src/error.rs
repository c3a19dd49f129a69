//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email, wrong password, or both. Deliberately one message.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Session storage error
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Storage(_) => {
                AppError::new(self.kind(), "Something went wrong. Please try again.")
            }
            AuthError::InvalidCredentials => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session storage error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}
