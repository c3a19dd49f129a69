//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::session_marker::SessionMarker;
use crate::error::AuthResult;

/// What the session scope holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerLookup {
    /// None of the marker keys are present
    Missing,
    /// Some keys are present but they do not form a valid marker
    Malformed,
    Found(SessionMarker),
}

/// Session marker repository trait
///
/// One repository instance is one session scope, holding at most one marker.
#[trait_variant::make(SessionMarkerRepository: Send)]
pub trait LocalSessionMarkerRepository {
    /// Read the marker
    async fn find(&self) -> AuthResult<MarkerLookup>;

    /// Write the marker, replacing any previous one
    async fn save(&self, marker: &SessionMarker) -> AuthResult<()>;

    /// Remove every marker key; removing nothing is not an error
    async fn delete(&self) -> AuthResult<()>;
}
