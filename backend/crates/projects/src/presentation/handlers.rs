//! HTTP Handlers

use crate::application::config::ProjectsConfig;
use crate::application::list_projects::ListProjectsUseCase;
use crate::domain::source::RepositorySource;
use crate::presentation::dto::ProjectsResponse;
use axum::Json;
use axum::extract::State;
use kernel::error::app_error::AppError;
use std::sync::Arc;

/// Shared state for projects handlers
pub struct ProjectsAppState<S>
where
    S: RepositorySource + Send + Sync + 'static,
{
    pub source: Arc<S>,
    pub config: Arc<ProjectsConfig>,
}

impl<S> Clone for ProjectsAppState<S>
where
    S: RepositorySource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: Arc::clone(&self.config),
        }
    }
}

/// GET /api/projects
pub async fn list_projects<S>(
    State(state): State<ProjectsAppState<S>>,
) -> Result<Json<ProjectsResponse>, AppError>
where
    S: RepositorySource + Send + Sync + 'static,
{
    let profile_url = state.config.profile_url();
    let use_case = ListProjectsUseCase::new(state.source.clone(), state.config.clone());

    let projects = use_case.execute().await.map_err(|e| {
        e.log();
        e.to_app_error(Some(&profile_url))
    })?;

    Ok(Json(ProjectsResponse {
        projects: projects.into_iter().map(Into::into).collect(),
        profile_url,
    }))
}
