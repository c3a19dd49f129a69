//! Request Store Router

use crate::application::config::RequestsConfig;
use crate::domain::repository::AccessRequestRepository;
use crate::presentation::handlers::{self, RequestsAppState};
use axum::{Router, routing::post};
use kernel::clock::SharedClock;
use std::sync::Arc;

/// Create the request store router for any repository implementation.
///
/// Mount under `/api/requests`.
pub fn requests_router<R>(repo: Arc<R>, config: RequestsConfig, clock: SharedClock) -> Router
where
    R: AccessRequestRepository + Send + Sync + 'static,
{
    let state = RequestsAppState {
        repo,
        config: Arc::new(config),
        clock,
    };

    Router::new()
        .route("/", post(handlers::submit_request::<R>))
        .with_state(state)
}
