//! Domain Entities
//!
//! Core business entities for the request store.

use chrono::{DateTime, Utc};
use kernel::clock::serialize_iso_millis;
use kernel::id::AccessRequestId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Purpose, RequesterName};

/// AccessRequest entity - one visitor submission.
///
/// Field order and spelling match the persisted JSON:
/// `{"id":"1714557600000","name":..,"email":..,"purpose":"for work","timestamp":"2024-05-01T10:00:00.000Z"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub id: AccessRequestId,
    pub name: String,
    pub email: String,
    pub purpose: Purpose,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl AccessRequest {
    /// Create a request; the id is the creation time in epoch millis.
    ///
    /// `email` is stored as typed; callers validate it first.
    pub fn new(
        name: RequesterName,
        email: String,
        purpose: Purpose,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AccessRequestId::from_millis(created_at.timestamp_millis()),
            name: name.into_inner(),
            email,
            purpose,
            timestamp: created_at,
        }
    }

    /// Move this not-yet-stored request's id past `latest`, if needed
    pub(crate) fn placed_after(mut self, latest: AccessRequestId) -> Self {
        if self.id <= latest {
            self.id = latest.successor();
        }
        self
    }
}
