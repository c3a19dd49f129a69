//! GitHub REST Client

use crate::application::config::ProjectsConfig;
use crate::domain::entities::Project;
use crate::domain::source::RepositorySource;
use crate::error::{ProjectsError, ProjectsResult};
use reqwest::Client;

/// Unauthenticated client for public repository listings
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http_client: Client,
    repos_url: String,
}

impl GitHubClient {
    pub fn new(config: &ProjectsConfig) -> ProjectsResult<Self> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http_client,
            repos_url: config.repos_url(),
        })
    }
}

impl RepositorySource for GitHubClient {
    async fn recent_repositories(&self) -> ProjectsResult<Vec<Project>> {
        let response = self
            .http_client
            .get(&self.repos_url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProjectsError::Upstream { status, body });
        }

        Ok(response.json().await?)
    }
}
