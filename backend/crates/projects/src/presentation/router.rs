//! Projects Router

use crate::application::config::ProjectsConfig;
use crate::domain::source::RepositorySource;
use crate::presentation::handlers::{self, ProjectsAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the projects router for any repository source.
///
/// Mount under `/api/projects`.
pub fn projects_router<S>(source: Arc<S>, config: ProjectsConfig) -> Router
where
    S: RepositorySource + Send + Sync + 'static,
{
    let state = ProjectsAppState {
        source,
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_projects::<S>))
        .with_state(state)
}
