//! Unit tests for the projects crate

#[cfg(test)]
mod fixtures {
    use crate::domain::entities::Project;
    use crate::domain::source::RepositorySource;
    use crate::error::{ProjectsError, ProjectsResult};

    pub const GITHUB_PAGE: &str = r#"[
        {"id": 1, "name": "portfolio", "description": "Personal site", "html_url": "https://github.com/jawh33r/portfolio", "language": "TypeScript", "stargazers_count": 4, "updated_at": "2024-05-01T10:00:00Z", "fork": false},
        {"id": 2, "name": "n8n-fork", "description": "Patched n8n", "html_url": "https://github.com/jawh33r/n8n-fork", "language": "TypeScript", "stargazers_count": 0, "updated_at": "2024-04-30T10:00:00Z", "fork": true},
        {"id": 3, "name": "dotfiles", "description": null, "html_url": "https://github.com/jawh33r/dotfiles", "language": null, "stargazers_count": 1, "updated_at": "2024-04-29T10:00:00Z", "fork": false},
        {"id": 4, "name": "flows", "description": "Automation flows", "html_url": "https://github.com/jawh33r/flows", "language": null, "stargazers_count": 2, "updated_at": "2024-04-28T10:00:00Z", "fork": false}
    ]"#;

    pub fn page() -> Vec<Project> {
        serde_json::from_str(GITHUB_PAGE).unwrap()
    }

    /// Canned upstream
    pub enum FakeSource {
        Page(Vec<Project>),
        Down,
    }

    impl RepositorySource for FakeSource {
        async fn recent_repositories(&self) -> ProjectsResult<Vec<Project>> {
            match self {
                FakeSource::Page(projects) => Ok(projects.clone()),
                FakeSource::Down => Err(ProjectsError::Upstream {
                    status: 403,
                    body: "API rate limit exceeded".to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::fixtures::*;
    use crate::application::config::ProjectsConfig;
    use crate::application::list_projects::ListProjectsUseCase;
    use crate::error::ProjectsError;
    use std::sync::Arc;

    #[test]
    fn test_decodes_github_page() {
        let projects = page();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].language.as_deref(), Some("TypeScript"));
        assert_eq!(projects[2].description(), None);
    }

    #[tokio::test]
    async fn test_filters_upstream_page() {
        let use_case = ListProjectsUseCase::new(
            Arc::new(FakeSource::Page(page())),
            Arc::new(ProjectsConfig::default()),
        );
        let projects = use_case.execute().await.unwrap();
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["portfolio", "flows"]);
    }

    #[tokio::test]
    async fn test_empty_upstream_is_not_an_error() {
        let use_case = ListProjectsUseCase::new(
            Arc::new(FakeSource::Page(Vec::new())),
            Arc::new(ProjectsConfig::default()),
        );
        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_returned() {
        let use_case = ListProjectsUseCase::new(
            Arc::new(FakeSource::Down),
            Arc::new(ProjectsConfig::default()),
        );
        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, ProjectsError::Upstream { status: 403, .. }));
        assert_eq!(err.status_code().as_u16(), 503);
    }

    #[test]
    fn test_urls() {
        let config = ProjectsConfig::default();
        assert_eq!(
            config.repos_url(),
            "https://api.github.com/users/jawh33r/repos?sort=updated&per_page=20"
        );
        assert_eq!(config.profile_url(), "https://github.com/jawh33r");
    }
}

#[cfg(test)]
mod router_tests {
    use super::fixtures::*;
    use crate::application::config::ProjectsConfig;
    use crate::presentation::router::projects_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get(source: FakeSource) -> (StatusCode, serde_json::Value) {
        let response = projects_router(Arc::new(source), ProjectsConfig::default())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_lists_projects() {
        let (status, body) = get(FakeSource::Page(page())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profileUrl"], "https://github.com/jawh33r");
        assert_eq!(body["projects"].as_array().unwrap().len(), 2);
        assert_eq!(body["projects"][0]["htmlUrl"], "https://github.com/jawh33r/portfolio");
        assert_eq!(body["projects"][0]["stars"], 4);
    }

    #[tokio::test]
    async fn test_failure_points_at_profile() {
        let (status, body) = get(FakeSource::Down).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(
            body["action"]
                .as_str()
                .unwrap()
                .ends_with("https://github.com/jawh33r")
        );
    }
}

#[cfg(test)]
mod github_client_tests {
    use super::fixtures::GITHUB_PAGE;
    use crate::application::config::ProjectsConfig;
    use crate::domain::source::RepositorySource;
    use crate::error::ProjectsError;
    use crate::infra::github::GitHubClient;
    use axum::http::{HeaderMap, StatusCode};
    use axum::{Router, routing::get};

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn config(base_url: String) -> ProjectsConfig {
        ProjectsConfig {
            api_base_url: base_url,
            ..ProjectsConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetches_and_decodes() {
        let router = Router::new().route(
            "/users/jawh33r/repos",
            get(|headers: HeaderMap| async move {
                assert!(headers.contains_key("user-agent"));
                ([("content-type", "application/json")], GITHUB_PAGE)
            }),
        );
        let client = GitHubClient::new(&config(serve(router).await)).unwrap();

        let projects = client.recent_repositories().await.unwrap();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].name, "portfolio");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let router = Router::new().route(
            "/users/jawh33r/repos",
            get(|| async { (StatusCode::FORBIDDEN, "rate limited") }),
        );
        let client = GitHubClient::new(&config(serve(router).await)).unwrap();

        let err = client.recent_repositories().await.unwrap_err();
        assert!(matches!(err, ProjectsError::Upstream { status: 403, ref body } if body == "rate limited"));
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let router = Router::new().route("/users/jawh33r/repos", get(|| async { "not json" }));
        let client = GitHubClient::new(&config(serve(router).await)).unwrap();

        let err = client.recent_repositories().await.unwrap_err();
        assert!(matches!(err, ProjectsError::Http(_)));
    }
}
