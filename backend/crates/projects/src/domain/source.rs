//! Repository Source Trait

use crate::domain::entities::Project;
use crate::error::ProjectsResult;

/// Where public repositories come from
#[trait_variant::make(RepositorySource: Send)]
pub trait LocalRepositorySource {
    /// Recently updated public repositories, most recent first
    async fn recent_repositories(&self) -> ProjectsResult<Vec<Project>>;
}
