//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Unified error returned across crate boundaries and rendered to clients.
///
/// ## Fields
/// * `kind` - classification, maps to the HTTP status
/// * `message` - user-facing text, safe to render as-is
/// * `action` - optional follow-up for the user (e.g. a fallback link)
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// use kernel::error::kind::ErrorKind;
///
/// let err = AppError::new(ErrorKind::InternalServerError, "Failed to submit request")
///     .with_action("Reach out via https://www.linkedin.com/in/example/");
/// assert_eq!(err.status_code(), 500);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
}

/// `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Attach a user-facing follow-up action
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {}
