//! API DTOs (Data Transfer Objects)

use crate::domain::entities::AccessRequest;
use kernel::clock::to_iso_millis;
use serde::{Deserialize, Serialize};

/// Request for POST /api/requests
///
/// Missing fields decode as empty strings so they fail validation with a
/// readable message instead of a decode rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitRequestBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub purpose: String,
}

/// One access request as shown to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequestView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub purpose: String,
    pub purpose_label: String,
    pub timestamp: String,
}

impl From<&AccessRequest> for AccessRequestView {
    fn from(request: &AccessRequest) -> Self {
        Self {
            id: request.id.to_string(),
            name: request.name.clone(),
            email: request.email.clone(),
            purpose: request.purpose.as_str().to_string(),
            purpose_label: request.purpose.label().to_string(),
            timestamp: to_iso_millis(&request.timestamp),
        }
    }
}

impl From<AccessRequest> for AccessRequestView {
    fn from(request: AccessRequest) -> Self {
        Self::from(&request)
    }
}

/// Response for POST /api/requests
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub message: String,
    pub request: AccessRequestView,
}

impl SubmitResponse {
    pub fn submitted(request: &AccessRequest) -> Self {
        Self {
            status: "submitted",
            message: "Request submitted successfully! We'll get back to you soon.".to_string(),
            request: request.into(),
        }
    }
}
