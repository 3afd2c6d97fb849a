//! Order Repository
//!
//! Persistence for orders and their line items. The multi-row insert runs
//! inside a transaction so a cart is stored completely or not at all.

use super::RepoResult;
use chrono::{DateTime, Utc};
use shared::models::{Order, OrderDetail, OrderItemDetail, OrderStatus};
use sqlx::SqlitePool;
use std::collections::HashMap;

const ORDER_COLUMNS: &str = "id, table_id, status, total_amount, notes, created_at, updated_at";

/// Line item ready for insertion, price already snapshotted
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    pub menu_item_id: i64,
    pub quantity: i64,
    pub unit_price: i64,
    pub notes: String,
}

/// Joined row for detail queries
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    table_number: i64,
    status: OrderStatus,
    total_amount: i64,
    notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    order_id: i64,
    menu_item_id: i64,
    name: String,
    quantity: i64,
    unit_price: i64,
    notes: String,
}

impl ItemRow {
    fn into_detail(self) -> OrderItemDetail {
        OrderItemDetail {
            menu_item_id: self.menu_item_id,
            name: self.name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            line_total: self.unit_price * self.quantity,
            notes: self.notes,
        }
    }
}

/// Insert an order and all its line items in one transaction
pub async fn create_with_items(
    pool: &SqlitePool,
    table_id: i64,
    notes: &str,
    total_amount: i64,
    lines: &[NewOrderLine],
    now: DateTime<Utc>,
) -> RepoResult<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO orders (table_id, status, total_amount, notes, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(table_id)
    .bind(OrderStatus::Pending)
    .bind(total_amount)
    .bind(notes)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let order_id = result.last_insert_rowid();

    for line in lines {
        sqlx::query(
            "INSERT INTO order_item (order_id, menu_item_id, quantity, unit_price, notes) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(line.menu_item_id)
        .bind(line.quantity)
        .bind(line.unit_price)
        .bind(&line.notes)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(order_id)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order =
        sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(order)
}

/// Conditional status update
///
/// The `WHERE status = ?` guard makes concurrent updates race-safe: only
/// one writer observes the expected prior status. Returns whether a row
/// was changed.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    from: OrderStatus,
    to: OrderStatus,
    now: DateTime<Utc>,
) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE id = ? AND status = ?")
        .bind(to)
        .bind(now)
        .bind(id)
        .bind(from)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn find_detail(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderDetail>> {
    let row = sqlx::query_as::<_, OrderRow>(
        "SELECT o.id, t.table_number, o.status, o.total_amount, o.notes, o.created_at, o.updated_at \
         FROM orders o JOIN dining_table t ON t.id = o.table_id \
         WHERE o.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, ItemRow>(
        "SELECT i.order_id, i.menu_item_id, m.name, i.quantity, i.unit_price, i.notes \
         FROM order_item i JOIN menu_item m ON m.id = i.menu_item_id \
         WHERE i.order_id = ? ORDER BY i.id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(assemble(row, items.into_iter().map(ItemRow::into_detail).collect())))
}

/// Every order with items joined, oldest first
///
/// Ordering is by submission time with the id as tiebreak, so the feed is
/// stable across reads even when two orders share a timestamp.
pub async fn list_all_details(pool: &SqlitePool) -> RepoResult<Vec<OrderDetail>> {
    let rows = sqlx::query_as::<_, OrderRow>(
        "SELECT o.id, t.table_number, o.status, o.total_amount, o.notes, o.created_at, o.updated_at \
         FROM orders o JOIN dining_table t ON t.id = o.table_id \
         ORDER BY o.created_at, o.id",
    )
    .fetch_all(pool)
    .await?;

    let items = sqlx::query_as::<_, ItemRow>(
        "SELECT i.order_id, i.menu_item_id, m.name, i.quantity, i.unit_price, i.notes \
         FROM order_item i JOIN menu_item m ON m.id = i.menu_item_id \
         ORDER BY i.order_id, i.id",
    )
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i64, Vec<OrderItemDetail>> = HashMap::new();
    for item in items {
        grouped
            .entry(item.order_id)
            .or_default()
            .push(item.into_detail());
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let items = grouped.remove(&row.id).unwrap_or_default();
            assemble(row, items)
        })
        .collect())
}

pub async fn count_orders(pool: &SqlitePool) -> RepoResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn count_order_items(pool: &SqlitePool) -> RepoResult<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM order_item")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

fn assemble(row: OrderRow, items: Vec<OrderItemDetail>) -> OrderDetail {
    OrderDetail {
        id: row.id,
        table_number: row.table_number,
        status: row.status,
        total_amount: row.total_amount,
        notes: row.notes,
        created_at: row.created_at,
        updated_at: row.updated_at,
        items,
    }
}
