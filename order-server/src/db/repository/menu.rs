//! Menu Catalog Repository

use super::{RepoError, RepoResult};
use chrono::Utc;
use shared::models::{MenuCategory, MenuCategoryWithItems, MenuItem};
use sqlx::SqlitePool;

const ITEM_COLUMNS: &str =
    "id, category_id, name, description, price, is_available, sort_order, created_at, updated_at";

pub async fn find_item_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {ITEM_COLUMNS} FROM menu_item WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(item)
}

/// Active categories with their items, for the diner order page
///
/// Categories come back in display order; items within a category likewise.
pub async fn list_active_categories_with_items(
    pool: &SqlitePool,
) -> RepoResult<Vec<MenuCategoryWithItems>> {
    let categories = sqlx::query_as::<_, MenuCategory>(
        "SELECT id, name, sort_order, is_active, created_at FROM menu_category \
         WHERE is_active = 1 ORDER BY sort_order, name",
    )
    .fetch_all(pool)
    .await?;

    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT m.{} FROM menu_item m \
         JOIN menu_category c ON c.id = m.category_id \
         WHERE c.is_active = 1 \
         ORDER BY c.sort_order, m.sort_order, m.name",
        ITEM_COLUMNS.replace(", ", ", m.")
    ))
    .fetch_all(pool)
    .await?;

    let mut result: Vec<MenuCategoryWithItems> = categories
        .into_iter()
        .map(|c| MenuCategoryWithItems {
            id: c.id,
            name: c.name,
            items: Vec::new(),
        })
        .collect();

    for item in items {
        if let Some(category) = result.iter_mut().find(|c| c.id == item.category_id) {
            category.items.push(item);
        }
    }

    Ok(result)
}

pub async fn create_category(
    pool: &SqlitePool,
    name: &str,
    sort_order: i64,
) -> RepoResult<MenuCategory> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO menu_category (name, sort_order, is_active, created_at) VALUES (?, ?, 1, ?)",
    )
    .bind(name)
    .bind(sort_order)
    .bind(now)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    let category = sqlx::query_as::<_, MenuCategory>(
        "SELECT id, name, sort_order, is_active, created_at FROM menu_category WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    category.ok_or_else(|| RepoError::Database("Failed to create menu category".into()))
}

pub async fn create_item(
    pool: &SqlitePool,
    category_id: i64,
    name: &str,
    description: &str,
    price: i64,
) -> RepoResult<MenuItem> {
    if price < 0 {
        return Err(RepoError::Validation(format!(
            "Price must be non-negative, got {price}"
        )));
    }
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO menu_item (category_id, name, description, price, is_available, sort_order, created_at, updated_at) \
         VALUES (?, ?, ?, ?, 1, 0, ?, ?)",
    )
    .bind(category_id)
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_item_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

pub async fn update_item_price(pool: &SqlitePool, id: i64, price: i64) -> RepoResult<()> {
    if price < 0 {
        return Err(RepoError::Validation(format!(
            "Price must be non-negative, got {price}"
        )));
    }
    let rows = sqlx::query("UPDATE menu_item SET price = ?, updated_at = ? WHERE id = ?")
        .bind(price)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    Ok(())
}

pub async fn set_item_available(pool: &SqlitePool, id: i64, is_available: bool) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE menu_item SET is_available = ?, updated_at = ? WHERE id = ?")
        .bind(is_available)
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    Ok(())
}
