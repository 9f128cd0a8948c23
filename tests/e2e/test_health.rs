use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_ready_with_empty_history(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["history"], "readable");
    assert_eq!(body["entries"], 0);
    assert_eq!(body["capacity"], 50);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_degraded_when_history_is_corrupt(ctx: &TestContext) {
    let path = ctx.history_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "[{ broken").unwrap();

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["status"], "degraded");
    assert_eq!(response.json()["history"], "unreadable");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_request_id(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let id = response.header("x-request-id").unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reuse_incoming_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health/ready", &[("x-request-id", "replay-42")])
        .await
        .unwrap();

    assert_eq!(response.header("x-request-id").map(String::as_str), Some("replay-42"));
}
