//! Dining Table Repository

use super::{RepoError, RepoResult};
use chrono::Utc;
use shared::models::DiningTable;
use sqlx::SqlitePool;

pub async fn find_by_number(pool: &SqlitePool, table_number: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, table_number, is_active, created_at FROM dining_table WHERE table_number = ?",
    )
    .bind(table_number)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

pub async fn create(pool: &SqlitePool, table_number: i64) -> RepoResult<DiningTable> {
    if table_number <= 0 {
        return Err(RepoError::Validation(format!(
            "Table number must be positive, got {table_number}"
        )));
    }
    let now = Utc::now();
    sqlx::query("INSERT INTO dining_table (table_number, is_active, created_at) VALUES (?, 1, ?)")
        .bind(table_number)
        .bind(now)
        .execute(pool)
        .await?;
    find_by_number(pool, table_number)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dining table".into()))
}

/// Toggle the active flag — deactivated tables reject new orders
pub async fn set_active(pool: &SqlitePool, table_number: i64, is_active: bool) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE dining_table SET is_active = ? WHERE table_number = ?")
        .bind(is_active)
        .bind(table_number)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Table {table_number} not found")));
    }
    Ok(())
}
