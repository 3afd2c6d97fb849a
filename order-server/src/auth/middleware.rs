//! Authentication middleware
//!
//! Axum middleware enforcing JWT authentication on staff routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use shared::AppError;

/// Whether a request may pass without a token
///
/// Diner-facing routes are public: the menu page, order submission and
/// the health probe. Everything else under `/api/` is staff-only.
fn is_public_api_route(method: &http::Method, path: &str) -> bool {
    path == "/api/auth/login"
        || path == "/api/health"
        || path.starts_with("/api/menu/")
        || (path == "/api/orders" && method == http::Method::POST)
}

/// Require a valid staff token
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`CurrentUser`] into the request extensions.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();

    // CORS preflight skips auth
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes fall through to their own handling
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_api_route(req.method(), &path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(path, "Request without credentials on protected route");
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "Token validation failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        let get = http::Method::GET;
        let post = http::Method::POST;

        assert!(is_public_api_route(&post, "/api/auth/login"));
        assert!(is_public_api_route(&get, "/api/health"));
        assert!(is_public_api_route(&get, "/api/menu/4"));
        assert!(is_public_api_route(&post, "/api/orders"));
    }

    #[test]
    fn test_staff_routes_not_public() {
        let get = http::Method::GET;
        let post = http::Method::POST;

        assert!(!is_public_api_route(&get, "/api/kitchen/orders"));
        assert!(!is_public_api_route(&post, "/api/orders/7/status"));
        assert!(!is_public_api_route(&get, "/api/orders"));
    }
}
