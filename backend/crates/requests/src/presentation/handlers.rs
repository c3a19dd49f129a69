//! HTTP Handlers

use crate::application::config::RequestsConfig;
use crate::application::submit_request::{SubmitRequestInput, SubmitRequestUseCase};
use crate::domain::repository::AccessRequestRepository;
use crate::presentation::dto::{SubmitRequestBody, SubmitResponse};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::clock::SharedClock;
use kernel::error::app_error::AppError;
use std::sync::Arc;

/// Shared state for request store handlers
pub struct RequestsAppState<R>
where
    R: AccessRequestRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<RequestsConfig>,
    pub clock: SharedClock,
}

impl<R> Clone for RequestsAppState<R>
where
    R: AccessRequestRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
            clock: Arc::clone(&self.clock),
        }
    }
}

/// POST /api/requests
pub async fn submit_request<R>(
    State(state): State<RequestsAppState<R>>,
    Json(body): Json<SubmitRequestBody>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError>
where
    R: AccessRequestRepository + Send + Sync + 'static,
{
    let use_case = SubmitRequestUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.clock.clone(),
    );

    let input = SubmitRequestInput {
        name: body.name,
        email: body.email,
        purpose: body.purpose,
    };

    let stored = use_case.execute(input).await.map_err(|e| {
        e.log();
        e.to_app_error(Some(&state.config.fallback_contact_url))
    })?;

    Ok((StatusCode::CREATED, Json(SubmitResponse::submitted(&stored))))
}
