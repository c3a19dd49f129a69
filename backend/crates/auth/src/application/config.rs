//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Session key holding the marker token
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Session key holding the admin email
pub const AUTH_EMAIL_KEY: &str = "auth_email";
/// Session key holding the issue time in epoch millis
pub const AUTH_TIME_KEY: &str = "auth_time";

/// Every key a session marker occupies
pub const SESSION_KEYS: [&str; 3] = [AUTH_TOKEN_KEY, AUTH_EMAIL_KEY, AUTH_TIME_KEY];

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The one admin address (compared after trim + lowercase)
    pub admin_email: String,
    /// Expected rolling checksum of the admin password, lowercase hex
    pub admin_password_checksum: String,
    /// Fixed marker lifetime, counted from issue
    pub session_ttl: Duration,
    /// Where unauthenticated visitors of the admin view are sent
    pub login_form_path: String,
    /// Where a successful login lands
    pub admin_view_path: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: "jawh3r@gmail.com".to_string(),
            admin_password_checksum: "1b58".to_string(),
            session_ttl: Duration::from_secs(24 * 3600), // 24 hours
            login_form_path: "/auth".to_string(),
            admin_view_path: "/admin".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }
}
