//! Order submission and status transitions

use crate::db::repository::{RepoError, dining_table, menu, order};
use crate::db::repository::order::NewOrderLine;
use chrono::Utc;
use shared::models::{OrderDetail, OrderStatus, SubmitOrderRequest};
use shared::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Table {0} not found")]
    TableNotFound(i64),

    #[error("Table {0} is not accepting orders")]
    TableInactive(i64),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Menu item {0} not found")]
    MenuItemNotFound(i64),

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    #[error("Order total exceeds the representable amount")]
    AmountOverflow,

    #[error("Order {0} not found")]
    OrderNotFound(i64),

    #[error("Cannot change order status from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::TableNotFound(_) => AppError::with_message(ErrorCode::TableNotFound, message),
            OrderError::TableInactive(_) => AppError::with_message(ErrorCode::TableInactive, message),
            OrderError::EmptyCart => AppError::with_message(ErrorCode::OrderEmpty, message),
            OrderError::MenuItemNotFound(_) => {
                AppError::with_message(ErrorCode::MenuItemNotFound, message)
            }
            OrderError::InvalidQuantity(_) | OrderError::AmountOverflow => {
                AppError::with_message(ErrorCode::ValidationFailed, message)
            }
            OrderError::OrderNotFound(_) => AppError::with_message(ErrorCode::OrderNotFound, message),
            OrderError::InvalidTransition { .. } => {
                AppError::with_message(ErrorCode::InvalidStatusTransition, message)
            }
            OrderError::Repo(RepoError::NotFound(detail)) => {
                AppError::with_message(ErrorCode::NotFound, detail)
            }
            OrderError::Repo(RepoError::Validation(detail)) => AppError::validation(detail),
            OrderError::Repo(RepoError::Database(detail)) => {
                tracing::error!("Repository failure: {detail}");
                AppError::database("Database operation failed")
            }
        }
    }
}

/// Submit a cart as a new order
///
/// Resolves the table and every menu item before any write, snapshots the
/// current unit prices onto the lines, and stores order plus items in one
/// transaction. Unavailable items are still accepted: availability gates
/// what the menu shows, not what the kitchen will cook.
pub async fn submit_order(
    pool: &sqlx::SqlitePool,
    req: &SubmitOrderRequest,
) -> Result<OrderDetail, OrderError> {
    let table = dining_table::find_by_number(pool, req.table_number)
        .await?
        .ok_or(OrderError::TableNotFound(req.table_number))?;
    if !table.is_active {
        return Err(OrderError::TableInactive(req.table_number));
    }

    if req.items.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    // Resolve the whole cart before touching the orders table
    let mut lines = Vec::with_capacity(req.items.len());
    let mut total_amount: i64 = 0;
    for cart_item in &req.items {
        if cart_item.quantity <= 0 {
            return Err(OrderError::InvalidQuantity(cart_item.quantity));
        }
        let item = menu::find_item_by_id(pool, cart_item.id)
            .await?
            .ok_or(OrderError::MenuItemNotFound(cart_item.id))?;
        let line_total = item
            .price
            .checked_mul(cart_item.quantity)
            .ok_or(OrderError::AmountOverflow)?;
        total_amount = total_amount
            .checked_add(line_total)
            .ok_or(OrderError::AmountOverflow)?;
        lines.push(NewOrderLine {
            menu_item_id: item.id,
            quantity: cart_item.quantity,
            unit_price: item.price,
            notes: cart_item.notes.clone().unwrap_or_default(),
        });
    }

    let now = Utc::now();
    let notes = req.notes.as_deref().unwrap_or_default();
    let order_id = order::create_with_items(pool, table.id, notes, total_amount, &lines, now).await?;

    tracing::info!(
        order_id,
        table_number = req.table_number,
        total_amount,
        item_count = lines.len(),
        "Order submitted"
    );

    order::find_detail(pool, order_id)
        .await?
        .ok_or(OrderError::OrderNotFound(order_id))
}

/// Move an order to a new status
///
/// Validates the transition against the current status, then applies it
/// with a compare-and-set so a concurrent update cannot slip a second
/// transition through. On a lost race the order is re-read and the check
/// repeated against the fresh status.
pub async fn update_status(
    pool: &sqlx::SqlitePool,
    order_id: i64,
    requested: OrderStatus,
) -> Result<OrderDetail, OrderError> {
    let current = order::find_by_id(pool, order_id)
        .await?
        .ok_or(OrderError::OrderNotFound(order_id))?;

    if !current.status.can_transition_to(requested) {
        return Err(OrderError::InvalidTransition {
            from: current.status,
            to: requested,
        });
    }

    let updated = order::update_status(pool, order_id, current.status, requested, Utc::now()).await?;
    if !updated {
        // A concurrent writer changed the status between read and update
        let fresh = order::find_by_id(pool, order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;
        return Err(OrderError::InvalidTransition {
            from: fresh.status,
            to: requested,
        });
    }

    tracing::info!(
        order_id,
        from = %current.status,
        to = %requested,
        "Order status updated"
    );

    order::find_detail(pool, order_id)
        .await?
        .ok_or(OrderError::OrderNotFound(order_id))
}

/// All orders for the kitchen display, oldest first
pub async fn list_kitchen_orders(pool: &sqlx::SqlitePool) -> Result<Vec<OrderDetail>, OrderError> {
    Ok(order::list_all_details(pool).await?)
}
