//! Kitchen Display Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::orders;
use shared::AppError;
use shared::models::OrderDetail;

/// All orders, oldest first
///
/// The full history goes over the wire; the display decides what to show.
/// Kitchen screens poll this and typically filter to active statuses,
/// while the pass-through screen wants delivered orders too.
pub async fn list_orders(
    State(state): State<ServerState>,
) -> Result<Json<Vec<OrderDetail>>, AppError> {
    let orders = orders::list_kitchen_orders(&state.pool).await?;
    Ok(Json(orders))
}
