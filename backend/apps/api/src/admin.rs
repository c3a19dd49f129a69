//! Admin View
//!
//! Gate check first, then exactly one read of the request list.

use std::sync::Arc;

use auth::application::CheckSessionUseCase;
use auth::domain::repository::SessionMarkerRepository;
use auth::{AuthConfig, AuthResult, CookieSessionScope, SessionState};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::{Json, Router, routing::get};
use kernel::clock::SharedClock;
use requests::application::list_requests::ListRequestsUseCase;
use requests::domain::repository::AccessRequestRepository;
use requests::models::{AccessRequest, AccessRequestView};
use serde::Serialize;

/// Where the admin view's logout control posts to
pub const LOGOUT_PATH: &str = "/api/auth/logout";

/// What the admin view renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminView {
    /// Not signed in: send the visitor to the credential form
    Redirect(String),
    Requests {
        requests: Vec<AccessRequest>,
        total: usize,
    },
}

/// Admin View Use Case
pub struct AdminViewUseCase<S, R>
where
    S: SessionMarkerRepository,
    R: AccessRequestRepository,
{
    check_session: CheckSessionUseCase<S>,
    list_requests: ListRequestsUseCase<R>,
    login_form_path: String,
}

impl<S, R> AdminViewUseCase<S, R>
where
    S: SessionMarkerRepository,
    R: AccessRequestRepository,
{
    pub fn new(
        session_repo: Arc<S>,
        requests_repo: Arc<R>,
        config: Arc<AuthConfig>,
        clock: SharedClock,
    ) -> Self {
        Self {
            login_form_path: config.login_form_path.clone(),
            check_session: CheckSessionUseCase::new(session_repo, config, clock),
            list_requests: ListRequestsUseCase::new(requests_repo),
        }
    }

    pub async fn execute(&self) -> AuthResult<AdminView> {
        match self.check_session.execute().await? {
            SessionState::Authenticated(_) => {
                let requests = self.list_requests.execute().await;
                Ok(AdminView::Requests {
                    total: requests.len(),
                    requests,
                })
            }
            SessionState::Unauthenticated | SessionState::Expired => {
                Ok(AdminView::Redirect(self.login_form_path.clone()))
            }
        }
    }
}

/// Response for GET /api/admin/requests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRequestsResponse {
    pub requests: Vec<AccessRequestView>,
    pub total: usize,
    pub logout_path: &'static str,
}

pub struct AdminState<R>
where
    R: AccessRequestRepository + Send + Sync + 'static,
{
    pub requests_repo: Arc<R>,
    pub auth_config: Arc<AuthConfig>,
    pub clock: SharedClock,
}

impl<R> Clone for AdminState<R>
where
    R: AccessRequestRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            requests_repo: Arc::clone(&self.requests_repo),
            auth_config: Arc::clone(&self.auth_config),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// GET /api/admin/requests
pub async fn admin_requests<R>(
    State(state): State<AdminState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: AccessRequestRepository + Send + Sync + 'static,
{
    let scope = CookieSessionScope::from_headers(&headers);
    let use_case = AdminViewUseCase::new(
        Arc::new(scope.repository()),
        state.requests_repo.clone(),
        state.auth_config.clone(),
        state.clock.clone(),
    );

    let view = use_case.execute().await?;
    // An expired marker is cleared on the client too
    let cookies = AppendHeaders(scope.cookie_updates(&state.auth_config));

    let response = match view {
        AdminView::Redirect(to) => (cookies, Redirect::to(&to)).into_response(),
        AdminView::Requests { requests, total } => (
            cookies,
            Json(AdminRequestsResponse {
                requests: requests.iter().map(AccessRequestView::from).collect(),
                total,
                logout_path: LOGOUT_PATH,
            }),
        )
            .into_response(),
    };
    Ok(response)
}

/// Mount under `/api/admin`
pub fn admin_router<R>(requests_repo: Arc<R>, auth_config: AuthConfig, clock: SharedClock) -> Router
where
    R: AccessRequestRepository + Send + Sync + 'static,
{
    let state = AdminState {
        requests_repo,
        auth_config: Arc::new(auth_config),
        clock,
    };

    Router::new()
        .route("/requests", get(admin_requests::<R>))
        .with_state(state)
}
