//! Application Configuration
//!
//! Configuration for the request store application layer.

use std::time::Duration;

/// Storage key holding the JSON array of access requests
pub const ACCESS_REQUESTS_KEY: &str = "n8n_access_requests";

/// Contact link offered when a submission cannot be stored
pub const DEFAULT_FALLBACK_CONTACT_URL: &str = "https://www.linkedin.com/in/jawherayarii/";

/// Request store configuration
#[derive(Debug, Clone)]
pub struct RequestsConfig {
    /// Storage key for the request list
    pub storage_key: String,
    /// Wait applied after a successful write, before answering the visitor
    pub submit_delay: Duration,
    /// Where visitors are sent when their submission fails
    pub fallback_contact_url: String,
}

impl Default for RequestsConfig {
    fn default() -> Self {
        Self {
            storage_key: ACCESS_REQUESTS_KEY.to_string(),
            submit_delay: Duration::from_secs(1),
            fallback_contact_url: DEFAULT_FALLBACK_CONTACT_URL.to_string(),
        }
    }
}

impl RequestsConfig {
    /// Create config for development (short delay)
    pub fn development() -> Self {
        Self {
            submit_delay: Duration::from_millis(200),
            ..Default::default()
        }
    }

    /// No artificial delay
    pub fn immediate() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            ..Default::default()
        }
    }
}
