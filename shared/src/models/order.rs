//! Order Model
//!
//! Order and line-item entities plus the submission/status payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Order status lifecycle
///
/// ```text
/// pending → confirmed → preparing → ready → delivered
///     └────────┴───────────┴─────────┴──→ cancelled
/// ```
///
/// `delivered` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether moving from `self` to `next` is allowed
    ///
    /// Forward-only along the preparation pipeline; `cancelled` is
    /// reachable from any non-terminal state. Same-status updates are
    /// rejected.
    pub const fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Confirmed, Preparing)
                | (Preparing, Ready)
                | (Ready, Delivered)
                | (Pending, Cancelled)
                | (Confirmed, Cancelled)
                | (Preparing, Cancelled)
                | (Ready, Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity — one cart submission tied to a table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub table_id: i64,
    pub status: OrderStatus,
    /// Total in the smallest currency unit, always Σ line totals
    pub total_amount: i64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order line with the unit price captured at order time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
    /// Snapshot price — immune to later menu price edits
    pub unit_price: i64,
    pub notes: String,
}

impl OrderItem {
    pub fn line_total(&self) -> i64 {
        self.unit_price * self.quantity
    }
}

/// Order line enriched with the referenced menu item name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    pub menu_item_id: i64,
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
    pub line_total: i64,
    pub notes: String,
}

/// Order with table number and items eagerly joined
///
/// Returned by order submission and by the kitchen feed so callers never
/// need a secondary lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    pub table_number: i64,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemDetail>,
}

// ==================== Request / Response payloads ====================

/// Cart line submitted by a diner
///
/// `id` is the menu item identifier, matching the wire contract of the
/// order page client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CartItemInput {
    pub id: i64,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Submit order request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitOrderRequest {
    #[validate(range(min = 1, message = "table number must be positive"))]
    pub table_number: i64,
    #[validate(length(min = 1, message = "cart must contain at least one item"), nested)]
    pub items: Vec<CartItemInput>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Submit order response: `{"status":"success","order_id":N}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderResponse {
    pub status: String,
    pub order_id: i64,
}

impl SubmitOrderResponse {
    pub fn success(order_id: i64) -> Self {
        Self {
            status: "success".to_string(),
            order_id,
        }
    }
}

/// Status update request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
}

/// Status update response: `{"status":"success"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateResponse {
    pub status: String,
}

impl StatusUpdateResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}
