//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dining table entity
///
/// `table_number` is the diner-facing identity printed on the QR code;
/// `id` is the internal key orders reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub table_number: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
