//! Sign In Use Case
//!
//! Checks the admin credential and writes a fresh session marker.

use std::sync::Arc;

use kernel::clock::SharedClock;

use crate::application::config::AuthConfig;
use crate::domain::credential::CredentialVerifier;
use crate::domain::entity::session_marker::SessionMarker;
use crate::domain::repository::SessionMarkerRepository;
use crate::error::AuthResult;

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone)]
pub struct SignInOutput {
    pub marker: SessionMarker,
    pub expires_at_ms: i64,
    /// Admin view path
    pub redirect_to: String,
}

/// Sign in use case
pub struct SignInUseCase<V, S>
where
    V: CredentialVerifier,
    S: SessionMarkerRepository,
{
    verifier: Arc<V>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
    clock: SharedClock,
}

impl<V, S> SignInUseCase<V, S>
where
    V: CredentialVerifier,
    S: SessionMarkerRepository,
{
    pub fn new(
        verifier: Arc<V>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
        clock: SharedClock,
    ) -> Self {
        Self {
            verifier,
            session_repo,
            config,
            clock,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A failed check leaves any existing marker alone
        let email = self.verifier.verify(&input.email, &input.password).await?;

        let marker = SessionMarker::mint(email, self.clock.now_ms());
        self.session_repo.save(&marker).await?;

        tracing::info!(
            email = %marker.email,
            issued_at_ms = marker.issued_at_ms,
            "Admin signed in"
        );

        Ok(SignInOutput {
            expires_at_ms: marker.expires_at_ms(self.config.session_ttl),
            marker,
            redirect_to: self.config.admin_view_path.clone(),
        })
    }
}
