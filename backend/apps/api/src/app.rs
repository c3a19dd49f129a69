//! Router Assembly

use std::sync::Arc;

use auth::{FixedCredentialVerifier, auth_router};
use axum::Router;
use axum::http::{self, Method, header};
use kernel::clock::SharedClock;
use platform::storage::KeyValueStore;
use projects::domain::source::RepositorySource;
use projects::projects_router;
use requests::{StorageAccessRequestRepository, requests_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::admin::admin_router;
use crate::config::AppConfig;

/// Runtime dependencies the routers share
pub struct Services<S, P> {
    /// Persistent storage for the request store
    pub storage: Arc<S>,
    pub projects_source: Arc<P>,
    pub clock: SharedClock,
}

pub fn build_router<S, P>(config: &AppConfig, services: Services<S, P>) -> Router
where
    S: KeyValueStore + Send + Sync + 'static,
    P: RepositorySource + Send + Sync + 'static,
{
    let Services {
        storage,
        projects_source,
        clock,
    } = services;

    let requests_repo = Arc::new(StorageAccessRequestRepository::new(
        storage,
        config.requests.storage_key.clone(),
    ));
    let verifier = Arc::new(FixedCredentialVerifier::from_config(&config.auth));

    Router::new()
        .nest(
            "/api/requests",
            requests_router(requests_repo.clone(), config.requests.clone(), clock.clone()),
        )
        .nest(
            "/api/auth",
            auth_router(verifier, config.auth.clone(), clock.clone()),
        )
        .nest(
            "/api/admin",
            admin_router(requests_repo, config.auth.clone(), clock),
        )
        .nest(
            "/api/projects",
            projects_router(projects_source, config.projects.clone()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use kernel::clock::ManualClock;
    use platform::storage::MemoryStorage;
    use projects::ProjectsResult;
    use projects::models::Project;
    use tower::ServiceExt;

    struct NoProjects;

    impl RepositorySource for NoProjects {
        async fn recent_repositories(&self) -> ProjectsResult<Vec<Project>> {
            Ok(Vec::new())
        }
    }

    fn app() -> Router {
        let config = AppConfig::from_lookup(
            |key| (key == "SUBMIT_DELAY_MS").then(|| "0".to_string()),
            true,
        )
        .unwrap();
        let clock: SharedClock = Arc::new(ManualClock::at_ms(1_714_557_600_000));
        build_router(
            &config,
            Services {
                storage: Arc::new(MemoryStorage::new()),
                projects_source: Arc::new(NoProjects),
                clock,
            },
        )
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str, cookies: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookies) = cookies {
            builder = builder.header(header::COOKIE, cookies);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn cookie_header(response: &Response) -> String {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|c| c.split(';').next())
            .collect::<Vec<_>>()
            .join("; ")
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_admin_view_requires_login() {
        let response = app()
            .oneshot(get("/api/admin/requests", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/auth");
    }

    #[tokio::test]
    async fn test_submit_login_and_review() {
        let app = app();

        for (name, email, purpose) in [("Ana", "ana@x.io", "student"), ("Bo", "bo@y.io", "other")] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/requests",
                    serde_json::json!({ "name": name, "email": email, "purpose": purpose }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                serde_json::json!({ "email": "jawh3r@gmail.com", "password": "\u{e0}8" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookies = cookie_header(&response);

        let response = app
            .clone()
            .oneshot(get("/api/admin/requests", Some(&cookies)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["logoutPath"], "/api/auth/logout");
        assert_eq!(body["requests"][0]["name"], "Ana");
        assert_eq!(body["requests"][0]["purposeLabel"], "Student");
        assert_eq!(body["requests"][1]["name"], "Bo");
        assert_ne!(body["requests"][0]["id"], body["requests"][1]["id"]);
    }

    #[tokio::test]
    async fn test_wrong_password_stays_out() {
        let app = app();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/login",
                serde_json::json!({ "email": "jawh3r@gmail.com", "password": "7050" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let cookies = cookie_header(&response);
        assert!(cookies.is_empty());
    }

    #[tokio::test]
    async fn test_projects_route() {
        let response = app().oneshot(get("/api/projects", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["projects"], serde_json::json!([]));
    }
}
