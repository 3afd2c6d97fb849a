//! Menu Routes

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Build menu router
/// - /api/menu/{table_number}: public (diners reach it by scanning a QR code)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu/{table_number}", get(handler::menu_for_table))
}
