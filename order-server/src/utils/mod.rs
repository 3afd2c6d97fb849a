//! Utility Module

pub mod logger;

// Re-export unified error types for convenience
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};
