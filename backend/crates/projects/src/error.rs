//! Projects Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Projects result type alias
pub type ProjectsResult<T> = Result<T, ProjectsError>;

#[derive(Debug, Error)]
pub enum ProjectsError {
    /// GitHub answered with a non-2xx status
    #[error("GitHub API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Request failed or the body could not be decoded
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ProjectsError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectsError::Upstream { .. } | ProjectsError::Http(_) => {
                ErrorKind::ServiceUnavailable
            }
        }
    }

    /// Convert to AppError, pointing at the GitHub profile when one is known
    pub fn to_app_error(&self, profile_url: Option<&str>) -> AppError {
        let err = AppError::new(self.kind(), "Failed to load projects. Please try again later.");
        match profile_url {
            Some(url) => err.with_action(format!("View all projects on GitHub: {url}")),
            None => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ProjectsError::Upstream { status, .. } => {
                tracing::warn!(status = *status, error = %self, "GitHub rejected repository listing");
            }
            ProjectsError::Http(e) => {
                tracing::warn!(error = %e, "GitHub repository listing failed");
            }
        }
    }
}

impl From<ProjectsError> for AppError {
    fn from(err: ProjectsError) -> Self {
        err.to_app_error(None)
    }
}

impl IntoResponse for ProjectsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error(None).into_response()
    }
}
