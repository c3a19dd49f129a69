//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};
use kernel::clock::SharedClock;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::credential::CredentialVerifier;
use crate::domain::entity::session_marker::SessionState;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, SessionStatusResponse};
use crate::presentation::session_scope::CookieSessionScope;

/// Shared state for auth handlers
pub struct AuthAppState<V>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    pub verifier: Arc<V>,
    pub config: Arc<AuthConfig>,
    pub clock: SharedClock,
}

impl<V> Clone for AuthAppState<V>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            verifier: Arc::clone(&self.verifier),
            config: Arc::clone(&self.config),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// POST /api/auth/login
pub async fn login<V>(
    State(state): State<AuthAppState<V>>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    let scope = CookieSessionScope::from_headers(&headers);

    let use_case = SignInUseCase::new(
        state.verifier.clone(),
        Arc::new(scope.repository()),
        state.config.clone(),
        state.clock.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::OK,
        AppendHeaders(scope.cookie_updates(&state.config)),
        Json(LoginResponse {
            email: output.marker.email,
            expires_at_ms: output.expires_at_ms,
            redirect_to: output.redirect_to,
        }),
    ))
}

/// GET /api/auth/session
pub async fn session_status<V>(
    State(state): State<AuthAppState<V>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    let scope = CookieSessionScope::from_headers(&headers);
    let session = scope.check(&state.config, &state.clock).await?;

    let body = match session {
        SessionState::Authenticated(marker) => SessionStatusResponse {
            authenticated: true,
            expires_at_ms: Some(marker.expires_at_ms(state.config.session_ttl)),
            email: Some(marker.email),
        },
        SessionState::Unauthenticated | SessionState::Expired => SessionStatusResponse {
            authenticated: false,
            email: None,
            expires_at_ms: None,
        },
    };

    // Expired or malformed markers are cleared on the client as well
    Ok((AppendHeaders(scope.cookie_updates(&state.config)), Json(body)))
}

/// POST /api/auth/logout
pub async fn logout<V>(
    State(state): State<AuthAppState<V>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    let scope = CookieSessionScope::from_headers(&headers);
    SignOutUseCase::new(Arc::new(scope.repository()))
        .execute()
        .await?;

    Ok((
        StatusCode::NO_CONTENT,
        AppendHeaders(CookieSessionScope::clear_all(&state.config)),
    ))
}
