//! The table renders fetched rows: users are requested at app start and their
//! cells (including derived ones) show up once the fetch lands.

mod common;

use common::TestCtx;
use kittest::Queryable;

#[tokio::test]
async fn initial_fetch_displays_users() {
    let mut ctx = TestCtx::with_users(&["user1", "user2"]).await;
    ctx.settle().await;

    let harness = &ctx.harness;
    assert!(
        harness.query_by_label_contains("user1").is_some(),
        "first user row should be visible"
    );
    assert!(
        harness.query_by_label_contains("user2").is_some(),
        "second user row should be visible"
    );
}

#[tokio::test]
async fn derived_cells_are_rendered() {
    let mut ctx = TestCtx::with_users(&["ann"]).await;
    ctx.settle().await;

    let harness = &ctx.harness;
    // Joined certificate list and first profession come from row helpers.
    assert!(harness.query_by_label_contains("CPR").is_some());
    assert!(harness.query_by_label_contains("Nurse").is_some());
    assert!(harness.query_by_label_contains("Springfield").is_some());
}

#[tokio::test]
async fn total_count_is_shown_in_pagination_bar() {
    let mut ctx = TestCtx::with_users(&["a", "b", "c"]).await;
    ctx.settle().await;

    assert!(ctx.harness.query_by_label_contains("3 total").is_some());
    assert!(ctx.harness.query_by_label_contains("Page 1 of 1").is_some());
}
