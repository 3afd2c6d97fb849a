//! HTTP API Module
//!
//! One submodule per route group, each exposing a `router()` that the
//! server merges:
//!
//! - `auth` - staff login
//! - `menu` - diner-facing menu for a table
//! - `orders` - order submission and status updates
//! - `kitchen_orders` - kitchen display feed
//! - `health` - liveness probe

pub mod auth;
pub mod health;
pub mod kitchen_orders;
pub mod menu;
pub mod orders;
