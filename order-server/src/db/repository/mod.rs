//! Repository Module
//!
//! Module-level CRUD functions over the SQLite pool, one module per
//! aggregate. Repositories return [`RepoError`]; the workflow layer maps
//! those onto domain errors.

pub mod dining_table;
pub mod menu;
pub mod order;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
