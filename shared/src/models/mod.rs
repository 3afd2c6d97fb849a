//! Domain models
//!
//! Row-level entities plus the request/response payloads built from them.
//! Database derives are feature-gated behind `db`.

pub mod dining_table;
pub mod menu;
pub mod order;

pub use dining_table::DiningTable;
pub use menu::{MenuCategory, MenuCategoryWithItems, MenuItem};
pub use order::{
    CartItemInput, Order, OrderDetail, OrderItem, OrderItemDetail, OrderStatus,
    StatusUpdateRequest, StatusUpdateResponse, SubmitOrderRequest, SubmitOrderResponse,
};
