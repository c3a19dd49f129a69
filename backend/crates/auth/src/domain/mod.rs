//! Domain Layer
//!
//! Contains the session marker entity and the repository/verifier traits.

pub mod credential;
pub mod entity;
pub mod repository;

// Re-exports
pub use credential::CredentialVerifier;
pub use entity::session_marker::{SessionMarker, SessionState};
pub use repository::{MarkerLookup, SessionMarkerRepository};
