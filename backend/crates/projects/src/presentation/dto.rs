//! API DTOs (Data Transfer Objects)

use crate::domain::entities::Project;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One project card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub name: String,
    pub description: String,
    pub html_url: String,
    pub language: Option<String>,
    pub stars: u64,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        Self {
            description: project.description().unwrap_or_default().to_string(),
            name: project.name,
            html_url: project.html_url,
            language: project.language,
            stars: project.stargazers_count,
            updated_at: project.updated_at,
        }
    }
}

/// Response for GET /api/projects
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectView>,
    pub profile_url: String,
}
