//! Empty-but-successful and failed fetches must be visually distinct: the
//! former shows the "no records" hint, the latter an error banner.

mod common;

use common::TestCtx;
use kittest::Queryable;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn empty_result_shows_no_records_not_an_error() {
    let mut ctx = TestCtx::with_users(&[]).await;
    ctx.settle().await;

    let harness = &ctx.harness;
    assert!(
        harness.query_by_label_contains("No records available").is_some(),
        "empty success should show the no-records hint"
    );
    assert!(
        harness.query_by_label_contains("Error:").is_none(),
        "empty success must not look like a failure"
    );
}

#[tokio::test]
async fn failed_fetch_shows_error_not_no_records() {
    let mut ctx = TestCtx::with_response(ResponseTemplate::new(500)).await;
    ctx.settle().await;

    let harness = &ctx.harness;
    assert!(
        harness.query_by_label_contains("Error:").is_some(),
        "a failed fetch should show the error banner"
    );
    assert!(
        harness.query_by_label_contains("No records available").is_none(),
        "a failure must not be presented as an empty result"
    );
}

#[tokio::test]
async fn malformed_body_is_reported_as_an_error() {
    let template =
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "unexpected": true }));
    let mut ctx = TestCtx::with_response(template).await;
    ctx.settle().await;

    assert!(ctx.harness.query_by_label_contains("Error:").is_some());
}
