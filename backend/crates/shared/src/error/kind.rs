//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// Error classification shared by every crate in the workspace.
///
/// Each variant maps to exactly one HTTP status code. Handlers never pick
/// status codes by hand; they go through the kind.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Unauthorized;
/// assert_eq!(kind.status_code(), 401);
/// assert_eq!(kind.as_str(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - malformed or missing form fields
    BadRequest,
    /// 401 - credentials rejected or no valid session marker
    Unauthorized,
    /// 404 - resource not found
    NotFound,
    /// 422 - well-formed but semantically unusable input
    UnprocessableEntity,
    /// 500 - storage or other internal failure
    InternalServerError,
    /// 502 - upstream answered with something unusable
    BadGateway,
    /// 503 - upstream unreachable
    ServiceUnavailable,
    /// 507 - storage quota exhausted
    InsufficientStorage,
}

impl ErrorKind {
    /// HTTP status code for this kind
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
            ErrorKind::InsufficientStorage => 507,
        }
    }

    /// Standard reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
            ErrorKind::InsufficientStorage => "Insufficient Storage",
        }
    }

    /// 5xx kinds. These are the ones worth an `error!` log line.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::BadGateway.status_code(), 502);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
        assert_eq!(ErrorKind::InsufficientStorage.status_code(), 507);
    }

    #[test]
    fn test_error_classes() {
        assert!(!ErrorKind::BadRequest.is_server_error());
        assert!(!ErrorKind::Unauthorized.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::InsufficientStorage.is_server_error());
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
    }

    #[test]
    fn test_serialized_name() {
        let json = serde_json::to_string(&ErrorKind::InsufficientStorage).unwrap();
        assert_eq!(json, r#""INSUFFICIENT_STORAGE""#);
    }
}
