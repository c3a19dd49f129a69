//! Check Session Use Case
//!
//! Reads the session marker and decides whether the admin view may render.

use std::sync::Arc;

use kernel::clock::SharedClock;

use crate::application::config::AuthConfig;
use crate::domain::entity::session_marker::SessionState;
use crate::domain::repository::{MarkerLookup, SessionMarkerRepository};
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionMarkerRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
    clock: SharedClock,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionMarkerRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>, clock: SharedClock) -> Self {
        Self {
            session_repo,
            config,
            clock,
        }
    }

    /// Classify the session, removing expired or malformed markers
    pub async fn execute(&self) -> AuthResult<SessionState> {
        let marker = match self.session_repo.find().await? {
            MarkerLookup::Missing => return Ok(SessionState::Unauthenticated),
            MarkerLookup::Malformed => {
                tracing::warn!("Malformed session marker removed");
                self.session_repo.delete().await?;
                return Ok(SessionState::Unauthenticated);
            }
            MarkerLookup::Found(marker) => marker,
        };

        if marker.is_expired_at(self.clock.now_ms(), self.config.session_ttl) {
            self.session_repo.delete().await?;
            tracing::info!(
                email = %marker.email,
                issued_at_ms = marker.issued_at_ms,
                "Session expired"
            );
            return Ok(SessionState::Expired);
        }

        Ok(SessionState::Authenticated(marker))
    }
}
