//! Order Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::orders;
use shared::AppError;
use shared::models::{
    StatusUpdateRequest, StatusUpdateResponse, SubmitOrderRequest, SubmitOrderResponse,
};

/// Submit a new order
pub async fn submit(
    State(state): State<ServerState>,
    Json(req): Json<SubmitOrderRequest>,
) -> Result<Json<SubmitOrderResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let detail = orders::submit_order(&state.pool, &req).await?;
    Ok(Json(SubmitOrderResponse::success(detail.id)))
}

/// Update the status of an order
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<StatusUpdateResponse>, AppError> {
    orders::update_status(&state.pool, id, req.status).await?;
    Ok(Json(StatusUpdateResponse::success()))
}
