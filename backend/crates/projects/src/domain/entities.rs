//! Domain Entities

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A public repository as GitHub lists it. Unused fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Description, if present and non-empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
