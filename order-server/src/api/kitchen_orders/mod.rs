//! Kitchen Display Routes

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Build kitchen router
/// - GET /api/kitchen/orders: staff only
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/kitchen/orders", get(handler::list_orders))
}
