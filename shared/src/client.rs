//! Client DTOs
//!
//! Payloads exchanged with staff clients (kitchen displays, admin tools).

use serde::{Deserialize, Serialize};

/// Login request — staff password only, no user accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Login response carrying the capability token for staff routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}
