//! Server Configuration
//!
//! Environment variables (a `.env` file is loaded first):
//!
//! | Variable                  | Default                                      |
//! |---------------------------|----------------------------------------------|
//! | `LISTEN_ADDR`             | `0.0.0.0:31113`                              |
//! | `STORAGE_PATH`            | `data/storage.json`                          |
//! | `STORAGE_QUOTA_BYTES`     | 5 MiB; `0` disables the quota                |
//! | `ADMIN_EMAIL`             | built-in admin address                       |
//! | `ADMIN_PASSWORD_CHECKSUM` | built-in checksum                            |
//! | `SUBMIT_DELAY_MS`         | 1000 (200 in debug builds)                   |
//! | `GITHUB_USER`             | `jawh33r`                                    |
//! | `FRONTEND_ORIGINS`        | `http://localhost:40922,http://127.0.0.1:40922` |

use anyhow::Context;
use auth::AuthConfig;
use platform::storage::DEFAULT_QUOTA_BYTES;
use projects::ProjectsConfig;
use requests::RequestsConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_STORAGE_PATH: &str = "data/storage.json";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub storage_path: PathBuf,
    pub storage_quota_bytes: Option<usize>,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub requests: RequestsConfig,
    pub projects: ProjectsConfig,
}

impl AppConfig {
    /// Read the process environment. Debug builds start from development configs.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut auth, mut requests, mut projects) = if development {
            (
                AuthConfig::development(),
                RequestsConfig::development(),
                ProjectsConfig::development(),
            )
        } else {
            (
                AuthConfig::default(),
                RequestsConfig::default(),
                ProjectsConfig::default(),
            )
        };

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("LISTEN_ADDR must be a socket address like 0.0.0.0:31113")?;

        let storage_path = lookup("STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH));

        let storage_quota_bytes = match lookup("STORAGE_QUOTA_BYTES") {
            Some(raw) => {
                let bytes: usize = raw
                    .trim()
                    .parse()
                    .context("STORAGE_QUOTA_BYTES must be a byte count")?;
                (bytes > 0).then_some(bytes)
            }
            None => Some(DEFAULT_QUOTA_BYTES),
        };

        if let Some(email) = lookup("ADMIN_EMAIL") {
            auth.admin_email = email;
        }
        if let Some(checksum) = lookup("ADMIN_PASSWORD_CHECKSUM") {
            auth.admin_password_checksum = checksum;
        }

        if let Some(raw) = lookup("SUBMIT_DELAY_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .context("SUBMIT_DELAY_MS must be a whole number of milliseconds")?;
            requests.submit_delay = Duration::from_millis(ms);
        }

        if let Some(user) = lookup("GITHUB_USER") {
            projects.github_user = user;
        }

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            listen_addr,
            storage_path,
            storage_quota_bytes,
            frontend_origins,
            auth,
            requests,
            projects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned(), false)
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.listen_addr.port(), 31113);
        assert_eq!(config.storage_quota_bytes, Some(5 * 1024 * 1024));
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.auth.admin_password_checksum, "1b58");
        assert!(config.auth.cookie_secure);
        assert_eq!(config.requests.submit_delay, Duration::from_secs(1));
        assert_eq!(config.projects.github_user, "jawh33r");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("LISTEN_ADDR", "127.0.0.1:8080"),
            ("STORAGE_QUOTA_BYTES", "0"),
            ("ADMIN_EMAIL", "owner@example.com"),
            ("SUBMIT_DELAY_MS", "0"),
            ("GITHUB_USER", "someone"),
            ("FRONTEND_ORIGINS", "https://a.example, ,https://b.example"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.storage_quota_bytes, None);
        assert_eq!(config.auth.admin_email, "owner@example.com");
        assert!(config.requests.submit_delay.is_zero());
        assert_eq!(config.projects.github_user, "someone");
        assert_eq!(
            config.frontend_origins,
            ["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(load(&[("SUBMIT_DELAY_MS", "soon")]).is_err());
        assert!(load(&[("LISTEN_ADDR", "nowhere")]).is_err());
        assert!(load(&[("STORAGE_QUOTA_BYTES", "-1")]).is_err());
    }

    #[test]
    fn test_development_cookies_are_not_secure() {
        let config = AppConfig::from_lookup(|_| None, true).unwrap();
        assert!(!config.auth.cookie_secure);
    }
}
