//! Order Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Build order router
/// - POST /api/orders: public (diners submit carts without an account)
/// - POST /api/orders/{id}/status: staff only
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", post(handler::submit))
        .route("/api/orders/{id}/status", post(handler::update_status))
}
