//! Menu Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{dining_table, menu};
use crate::orders::OrderError;
use shared::AppError;
use shared::models::MenuCategoryWithItems;

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub table_number: i64,
    pub categories: Vec<MenuCategoryWithItems>,
}

/// Menu for a table
///
/// Resolves the table first so a stale QR code gets a proper 404 instead
/// of an orderable menu.
pub async fn menu_for_table(
    State(state): State<ServerState>,
    Path(table_number): Path<i64>,
) -> Result<Json<MenuResponse>, AppError> {
    let table = dining_table::find_by_number(&state.pool, table_number)
        .await
        .map_err(OrderError::from)?
        .ok_or(OrderError::TableNotFound(table_number))?;
    if !table.is_active {
        return Err(OrderError::TableInactive(table_number).into());
    }

    let categories = menu::list_active_categories_with_items(&state.pool)
        .await
        .map_err(OrderError::from)?;

    Ok(Json(MenuResponse {
        table_number,
        categories,
    }))
}
