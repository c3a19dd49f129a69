//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod admin;
mod app;
mod config;

use anyhow::Context;
use kernel::clock::SystemClock;
use platform::storage::FileStorage;
use projects::GitHubClient;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{Services, build_router};
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,requests=info,projects=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Storage file
    if let Some(dir) = config.storage_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
    }
    let storage =
        FileStorage::new(&config.storage_path).with_quota(config.storage_quota_bytes);
    tracing::info!(
        path = %config.storage_path.display(),
        quota_bytes = ?config.storage_quota_bytes,
        "Using file storage"
    );

    let github = GitHubClient::new(&config.projects).context("Failed to create GitHub client")?;

    let app = build_router(
        &config,
        Services {
            storage: Arc::new(storage),
            projects_source: Arc::new(github),
            clock: SystemClock::shared(),
        },
    );

    // Start server
    tracing::info!("Listening on {}", config.listen_addr);

    let listener = TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
