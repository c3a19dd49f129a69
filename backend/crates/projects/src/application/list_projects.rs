//! List Projects Use Case

use crate::application::config::ProjectsConfig;
use crate::domain::entities::Project;
use crate::domain::showcase::select_showcase;
use crate::domain::source::RepositorySource;
use crate::error::ProjectsResult;
use std::sync::Arc;

/// List Projects Use Case
///
/// One upstream call per execution; failures are returned, not retried.
pub struct ListProjectsUseCase<S>
where
    S: RepositorySource,
{
    source: Arc<S>,
    config: Arc<ProjectsConfig>,
}

impl<S> ListProjectsUseCase<S>
where
    S: RepositorySource,
{
    pub fn new(source: Arc<S>, config: Arc<ProjectsConfig>) -> Self {
        Self { source, config }
    }

    pub async fn execute(&self) -> ProjectsResult<Vec<Project>> {
        let fetched = self.source.recent_repositories().await?;
        let fetched_count = fetched.len();
        let projects = select_showcase(fetched, self.config.max_projects);

        tracing::debug!(
            fetched = fetched_count,
            shown = projects.len(),
            "Projects listed"
        );
        Ok(projects)
    }
}
