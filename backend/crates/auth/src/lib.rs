//! Session Gate
//!
//! Clean Architecture structure:
//! - `domain/` - Session marker entity, session state, repository and verifier traits
//! - `application/` - Sign in, check session, sign out use cases
//! - `infra/` - Key/value session storage, fixed admin credential
//! - `presentation/` - HTTP handlers, DTOs, cookie-backed session scope, router
//!
//! ## Session Model
//! - A successful credential check writes a marker under `auth_token`,
//!   `auth_email` and `auth_time` in session-scoped storage
//! - The marker is valid for a fixed 24 hours from `auth_time`; there is no
//!   sliding renewal
//! - Expired or malformed markers are removed when they are noticed
//!
//! ## Security Model
//! The admin password is compared through a non-cryptographic checksum and
//! the marker is not signed, so anyone who can write the session scope can
//! forge it. The gate keeps casual visitors out of the admin view; it is not
//! an access control boundary. [`CredentialVerifier`] is the seam for a real
//! server-side check.
//!
//! [`CredentialVerifier`]: domain::credential::CredentialVerifier

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::session_marker::{SessionMarker, SessionState};
pub use error::{AuthError, AuthResult};
pub use infra::fixed_credential::FixedCredentialVerifier;
pub use infra::session_storage::StorageSessionRepository;
pub use presentation::router::auth_router;
pub use presentation::session_scope::CookieSessionScope;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
