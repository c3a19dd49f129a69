//! Application Configuration

use std::time::Duration;

/// Projects listing configuration
#[derive(Debug, Clone)]
pub struct ProjectsConfig {
    /// GitHub account whose repositories are listed
    pub github_user: String,
    /// GitHub REST API base URL
    pub api_base_url: String,
    /// How many recently updated repositories to ask for
    pub per_page: u8,
    /// How many to show after filtering
    pub max_projects: usize,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            github_user: "jawh33r".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            per_page: 20,
            max_projects: 12,
            request_timeout: Duration::from_secs(10),
            user_agent: "portfolio-api".to_string(),
        }
    }
}

impl ProjectsConfig {
    /// Create config for development
    pub fn development() -> Self {
        Self {
            user_agent: "portfolio-api-dev".to_string(),
            ..Default::default()
        }
    }

    pub fn with_github_user(mut self, user: impl Into<String>) -> Self {
        self.github_user = user.into();
        self
    }

    /// Public profile page, offered when the listing fails
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_user)
    }

    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base_url.trim_end_matches('/'),
            self.github_user,
            self.per_page
        )
    }
}
