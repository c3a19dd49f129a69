//! Showcase Selection

use crate::domain::entities::Project;

/// Keep repositories worth showing, in upstream order, at most `limit`.
///
/// Names containing `fork` and repositories without a description are dropped.
pub fn select_showcase(projects: Vec<Project>, limit: usize) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|p| !p.name.contains("fork") && p.description().is_some())
        .take(limit)
        .collect()
}
