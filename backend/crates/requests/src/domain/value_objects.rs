//! Domain Value Objects

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RequestError;

/// Why the visitor wants access.
///
/// Stored spellings are `"student"`, `"for work"` and `"other"`; input also
/// accepts `"for_work"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Purpose {
    #[serde(rename = "student")]
    #[display("student")]
    Student,
    #[serde(rename = "for work", alias = "for_work")]
    #[display("for work")]
    ForWork,
    #[serde(rename = "other")]
    #[display("other")]
    Other,
}

impl Purpose {
    /// Stored spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Student => "student",
            Purpose::ForWork => "for work",
            Purpose::Other => "other",
        }
    }

    /// Display label for the admin view
    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Student => "Student",
            Purpose::ForWork => "For Work",
            Purpose::Other => "Other",
        }
    }
}

impl FromStr for Purpose {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Purpose::Student),
            "for work" | "for_work" => Ok(Purpose::ForWork),
            "other" => Ok(Purpose::Other),
            _ => Err(RequestError::Validation(
                "Purpose must be one of: student, for work, other".to_string(),
            )),
        }
    }
}

/// Requester's name as typed; must not be blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterName(String);

impl RequesterName {
    pub fn new(name: impl Into<String>) -> Result<Self, RequestError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RequestError::Validation("Name cannot be empty".to_string()));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
