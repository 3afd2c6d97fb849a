//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::AppError;
use shared::client::{LoginRequest, LoginResponse};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Checks the shared staff password and returns a JWT token. There is a
/// single staff role; kitchen displays and waiter terminals all log in
/// with the same credential.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    if state.config.admin_password.is_empty() {
        tracing::error!("ADMIN_PASSWORD not configured, rejecting login");
        return Err(AppError::invalid_credentials());
    }

    if req.password != state.config.admin_password {
        tracing::warn!("Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token("staff")
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!("Staff logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: jwt_service.config.expiration_minutes * 60,
    }))
}
