//! Order Workflow Module
//!
//! Domain logic for submitting orders and driving them through the status
//! lifecycle. Handlers call in here; this layer calls the repositories.

mod workflow;

pub use workflow::{OrderError, list_kitchen_orders, submit_order, update_status};
