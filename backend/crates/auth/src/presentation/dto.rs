//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub email: String,
    pub expires_at_ms: i64,
    /// Where the client should navigate next
    pub redirect_to: String,
}

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub email: Option<String>,
    pub expires_at_ms: Option<i64>,
}
