//! Error conversions - HTTP rendering of [`AppError`]
//!
//! RFC 7807 problem details when the `axum` feature is on.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::response::IntoResponse;

    #[test]
    fn test_problem_details_status() {
        let response = AppError::new(ErrorKind::InsufficientStorage, "Storage is full")
            .with_action("Reach out via https://www.linkedin.com/in/example/")
            .into_response();
        assert_eq!(response.status().as_u16(), 507);
    }
}
