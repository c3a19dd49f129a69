//! Cookie-Backed Session Scope
//!
//! The session keys travel as session cookies. Each request loads them into
//! an in-memory store, the use case works against that store, and whatever
//! changed is written back as `Set-Cookie` headers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::header::{self, HeaderName};
use axum::http::HeaderMap;
use kernel::clock::SharedClock;
use platform::cookie::{CookieConfig, extract_cookie};
use platform::storage::MemoryStorage;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::{AuthConfig, SESSION_KEYS};
use crate::domain::entity::session_marker::SessionState;
use crate::error::AuthResult;
use crate::infra::session_storage::StorageSessionRepository;

/// Header pairs ready for `axum::response::AppendHeaders`
pub type CookieUpdates = Vec<(HeaderName, String)>;

/// One request's view of the session scope
pub struct CookieSessionScope {
    storage: Arc<MemoryStorage>,
    initial: HashMap<String, String>,
}

impl CookieSessionScope {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let initial: HashMap<String, String> = SESSION_KEYS
            .iter()
            .filter_map(|key| extract_cookie(headers, key).map(|value| (key.to_string(), value)))
            .collect();

        Self {
            storage: Arc::new(MemoryStorage::from_entries(initial.clone())),
            initial,
        }
    }

    pub fn repository(&self) -> StorageSessionRepository<MemoryStorage> {
        StorageSessionRepository::new(Arc::clone(&self.storage))
    }

    /// Run the session check against this scope
    pub async fn check(
        &self,
        config: &Arc<AuthConfig>,
        clock: &SharedClock,
    ) -> AuthResult<SessionState> {
        CheckSessionUseCase::new(
            Arc::new(self.repository()),
            Arc::clone(config),
            Arc::clone(clock),
        )
        .execute()
        .await
    }

    /// `Set-Cookie` headers for every key that changed during the request
    pub fn cookie_updates(&self, config: &AuthConfig) -> CookieUpdates {
        let current = self.storage.snapshot();

        SESSION_KEYS
            .iter()
            .filter_map(|key| {
                let cookie = session_cookie(key, config);
                match (self.initial.get(*key), current.get(*key)) {
                    (before, Some(now)) if before != Some(now) => {
                        Some((header::SET_COOKIE, cookie.build_set_cookie(now)))
                    }
                    (Some(_), None) => Some((header::SET_COOKIE, cookie.build_delete_cookie())),
                    _ => None,
                }
            })
            .collect()
    }

    /// `Set-Cookie` headers deleting every session key
    pub fn clear_all(config: &AuthConfig) -> CookieUpdates {
        SESSION_KEYS
            .iter()
            .map(|key| {
                (
                    header::SET_COOKIE,
                    session_cookie(key, config).build_delete_cookie(),
                )
            })
            .collect()
    }
}

fn session_cookie(name: &str, config: &AuthConfig) -> CookieConfig {
    CookieConfig::session(name, config.cookie_secure, config.cookie_same_site)
}
