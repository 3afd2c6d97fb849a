//! Shared types for the QR table-ordering platform
//!
//! This crate holds everything both the server and its clients need to
//! agree on:
//!
//! - **Models** (`models`): dining tables, menu catalog, orders
//! - **Error system** (`error`): unified error codes and API responses
//! - **Client DTOs** (`client`): login request/response payloads
//!
//! Database derives (`sqlx::FromRow`, `sqlx::Type`) are gated behind the
//! `db` feature so that non-server consumers don't pull in sqlx.

pub mod client;
pub mod error;
pub mod models;

// Re-export the error types used on nearly every API boundary
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
