//! Menu Catalog Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Menu item entity
///
/// `price` is in the smallest currency unit. Orders copy it at submission
/// time; later edits here never touch existing orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub is_available: bool,
    pub sort_order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category with its items, for the diner-facing order page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryWithItems {
    pub id: i64,
    pub name: String,
    pub items: Vec<MenuItem>,
}
