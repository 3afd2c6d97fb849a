//! Order workflow integration tests
//!
//! Run against an in-memory SQLite database with the real migrations.

use order_server::db::DbService;
use order_server::db::repository::{dining_table, menu, order};
use order_server::orders::{self, OrderError};
use shared::models::{
    CartItemInput, DiningTable, MenuItem, OrderStatus, SubmitOrderRequest,
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

struct Fixture {
    table: DiningTable,
    dumpling: MenuItem,
    tea: MenuItem,
}

/// One active table and two menu items (800 and 300)
async fn seed(pool: &SqlitePool) -> Fixture {
    let table = dining_table::create(pool, 4).await.unwrap();
    let category = menu::create_category(pool, "Mains", 0).await.unwrap();
    let dumpling = menu::create_item(pool, category.id, "Dumplings", "Pork, 8pc", 800)
        .await
        .unwrap();
    let tea = menu::create_item(pool, category.id, "Jasmine tea", "", 300)
        .await
        .unwrap();
    Fixture {
        table,
        dumpling,
        tea,
    }
}

fn cart(lines: &[(i64, i64)]) -> SubmitOrderRequest {
    SubmitOrderRequest {
        table_number: 4,
        items: lines
            .iter()
            .map(|&(id, quantity)| CartItemInput {
                id,
                quantity,
                notes: None,
            })
            .collect(),
        notes: None,
    }
}

#[tokio::test]
async fn test_submit_order_snapshots_prices_and_totals() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let detail = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 2), (fx.tea.id, 1)]))
        .await
        .unwrap();

    assert_eq!(detail.table_number, 4);
    assert_eq!(detail.status, OrderStatus::Pending);
    assert_eq!(detail.total_amount, 2 * 800 + 300);
    assert_eq!(detail.items.len(), 2);

    let dumpling_line = detail
        .items
        .iter()
        .find(|i| i.menu_item_id == fx.dumpling.id)
        .unwrap();
    assert_eq!(dumpling_line.unit_price, 800);
    assert_eq!(dumpling_line.quantity, 2);
    assert_eq!(dumpling_line.line_total, 1600);
    assert_eq!(dumpling_line.name, "Dumplings");
    assert_eq!(fx.table.table_number, 4);
}

#[tokio::test]
async fn test_submit_order_empty_cart_rejected() {
    let pool = test_pool().await;
    let _fx = seed(&pool).await;

    let err = orders::submit_order(&pool, &cart(&[])).await.unwrap_err();
    assert!(matches!(err, OrderError::EmptyCart));
    assert_eq!(order::count_orders(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_order_unknown_table_rejected() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let mut req = cart(&[(fx.dumpling.id, 1)]);
    req.table_number = 99;
    let err = orders::submit_order(&pool, &req).await.unwrap_err();
    assert!(matches!(err, OrderError::TableNotFound(99)));
}

#[tokio::test]
async fn test_submit_order_inactive_table_rejected() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    dining_table::set_active(&pool, 4, false).await.unwrap();
    let err = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 1)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::TableInactive(4)));
    assert_eq!(order::count_orders(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_order_unknown_item_writes_nothing() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let bogus_id = fx.tea.id + 1000;
    let err = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 1), (bogus_id, 2)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::MenuItemNotFound(id) if id == bogus_id));

    // The whole cart is rejected, not just the bad line
    assert_eq!(order::count_orders(&pool).await.unwrap(), 0);
    assert_eq!(order::count_order_items(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_zero_quantity_rejected_before_write() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let err = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 1), (fx.tea.id, 0)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidQuantity(0)));

    let err = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, -2)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidQuantity(-2)));

    assert_eq!(order::count_orders(&pool).await.unwrap(), 0);
    assert_eq!(order::count_order_items(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_absurd_quantity_does_not_overflow_total() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let err = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, i64::MAX / 2)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::AmountOverflow));
    assert_eq!(order::count_orders(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_later_price_change_leaves_order_untouched() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let detail = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 2)]))
        .await
        .unwrap();

    menu::update_item_price(&pool, fx.dumpling.id, 1200)
        .await
        .unwrap();

    let after = order::find_detail(&pool, detail.id).await.unwrap().unwrap();
    assert_eq!(after.items[0].unit_price, 800);
    assert_eq!(after.total_amount, 1600);
}

#[tokio::test]
async fn test_unavailable_item_still_orderable() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    menu::set_item_available(&pool, fx.tea.id, false)
        .await
        .unwrap();

    let detail = orders::submit_order(&pool, &cart(&[(fx.tea.id, 1)]))
        .await
        .unwrap();
    assert_eq!(detail.total_amount, 300);
}

#[tokio::test]
async fn test_menu_marks_unavailable_items() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    menu::set_item_available(&pool, fx.tea.id, false)
        .await
        .unwrap();

    // The catalog still lists it; availability is presentation state
    let categories = menu::list_active_categories_with_items(&pool).await.unwrap();
    let items = &categories[0].items;
    assert_eq!(items.len(), 2);
    let tea = items.iter().find(|i| i.id == fx.tea.id).unwrap();
    assert!(!tea.is_available);
}

#[tokio::test]
async fn test_full_status_lifecycle() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let detail = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 1)]))
        .await
        .unwrap();

    for next in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ] {
        let updated = orders::update_status(&pool, detail.id, next).await.unwrap();
        assert_eq!(updated.status, next);
        // Status changes never touch the financials
        assert_eq!(updated.total_amount, detail.total_amount);
        assert_eq!(updated.items.len(), detail.items.len());
        assert!(updated.updated_at >= detail.updated_at);
    }
}

#[tokio::test]
async fn test_skip_and_regression_rejected() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let detail = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 1)]))
        .await
        .unwrap();

    // pending cannot jump straight to preparing
    let err = orders::update_status(&pool, detail.id, OrderStatus::Preparing)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Preparing
        }
    ));

    orders::update_status(&pool, detail.id, OrderStatus::Confirmed)
        .await
        .unwrap();

    // and confirmed cannot go back
    let err = orders::update_status(&pool, detail.id, OrderStatus::Pending)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition { .. }));

    // same-status updates are rejected too
    let err = orders::update_status(&pool, detail.id, OrderStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_terminal_orders_reject_updates() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let detail = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 1)]))
        .await
        .unwrap();
    orders::update_status(&pool, detail.id, OrderStatus::Cancelled)
        .await
        .unwrap();

    let err = orders::update_status(&pool, detail.id, OrderStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderError::InvalidTransition {
            from: OrderStatus::Cancelled,
            ..
        }
    ));
}

#[tokio::test]
async fn test_cancel_mid_preparation() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let detail = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 1)]))
        .await
        .unwrap();
    orders::update_status(&pool, detail.id, OrderStatus::Confirmed)
        .await
        .unwrap();
    orders::update_status(&pool, detail.id, OrderStatus::Preparing)
        .await
        .unwrap();

    let cancelled = orders::update_status(&pool, detail.id, OrderStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
}

#[tokio::test]
async fn test_update_status_unknown_order() {
    let pool = test_pool().await;
    let _fx = seed(&pool).await;

    let err = orders::update_status(&pool, 12345, OrderStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::OrderNotFound(12345)));
}

#[tokio::test]
async fn test_kitchen_feed_is_chronological_and_stable() {
    let pool = test_pool().await;
    let fx = seed(&pool).await;

    let first = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 1)]))
        .await
        .unwrap();
    let second = orders::submit_order(&pool, &cart(&[(fx.tea.id, 1)]))
        .await
        .unwrap();
    let third = orders::submit_order(&pool, &cart(&[(fx.dumpling.id, 3)]))
        .await
        .unwrap();

    // Progress one order; position in the feed must not change
    orders::update_status(&pool, first.id, OrderStatus::Confirmed)
        .await
        .unwrap();

    let feed = orders::list_kitchen_orders(&pool).await.unwrap();
    let ids: Vec<i64> = feed.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    // Two consecutive reads agree
    let again = orders::list_kitchen_orders(&pool).await.unwrap();
    let ids_again: Vec<i64> = again.iter().map(|o| o.id).collect();
    assert_eq!(ids, ids_again);

    // Every order carries its items
    assert!(feed.iter().all(|o| !o.items.is_empty()));
}

#[tokio::test]
async fn test_db_service_opens_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("orders.db");

    let db = DbService::new(&db_path.to_string_lossy()).await.unwrap();
    let fx = seed(&db.pool).await;

    let detail = orders::submit_order(&db.pool, &cart(&[(fx.tea.id, 2)]))
        .await
        .unwrap();
    assert_eq!(detail.total_amount, 600);
}
