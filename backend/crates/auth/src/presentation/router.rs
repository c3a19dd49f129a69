//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use kernel::clock::SharedClock;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::credential::CredentialVerifier;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any credential verifier.
///
/// Mount under `/api/auth`.
pub fn auth_router<V>(verifier: Arc<V>, config: AuthConfig, clock: SharedClock) -> Router
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    let state = AuthAppState {
        verifier,
        config: Arc::new(config),
        clock,
    };

    Router::new()
        .route("/login", post(handlers::login::<V>))
        .route("/session", get(handlers::session_status::<V>))
        .route("/logout", post(handlers::logout::<V>))
        .with_state(state)
}
