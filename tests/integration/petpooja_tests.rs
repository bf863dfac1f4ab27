//! Petpooja POS integration tests

use super::common::*;
use serde_json::json;

#[tokio::test]
async fn test_push_order_echoes_order_id() {
    let server = TestServer::spawn().await;

    let body = server
        .post_json("/mock/petpooja/order/push", json!({"order_id": "ORD-1001"}))
        .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["order_id"], "ORD-1001");
    assert_eq!(body["message"], "Order received successfully");

    let pos_id = body["pos_order_id"].as_str().unwrap();
    let millis = pos_id.strip_prefix("POS-").unwrap();
    assert!(millis.parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_push_order_numeric_id_is_echoed_verbatim() {
    let server = TestServer::spawn().await;

    let body = server
        .post_json("/mock/petpooja/order/push", json!({"order_id": 42}))
        .await;
    assert_eq!(body["order_id"], 42);
}

#[tokio::test]
async fn test_push_order_without_id() {
    let server = TestServer::spawn().await;

    for response in [
        server.post("/mock/petpooja/order/push", json!({})).await,
        server.post_raw("/mock/petpooja/order/push", "not json").await,
        server.post_raw("/mock/petpooja/order/push", "").await,
    ] {
        assert_status(&response, 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(body["order_id"].as_str().unwrap().starts_with("PP-"));
        assert!(body["pos_order_id"].as_str().unwrap().starts_with("POS-"));
    }
}

#[tokio::test]
async fn test_menu() {
    let server = TestServer::spawn().await;

    let body = server.get_json("/mock/petpooja/menu").await;
    assert_eq!(body["success"], true);
    assert_eq!(body["menu"]["categories"], json!([]));
    assert_eq!(body["menu"]["items"], json!([]));
    parse_timestamp(&body["menu"]["last_updated"]);
}

#[tokio::test]
async fn test_order_status_update() {
    let server = TestServer::spawn().await;

    let body = server
        .post_json("/mock/petpooja/order/status", json!({"status": "READY"}))
        .await;
    assert_eq!(body, json!({"success": true, "status": "ACCEPTED"}));
}

#[tokio::test]
async fn test_pos_health_counts() {
    let server = TestServer::spawn().await;

    server.get_json("/mock/petpooja/menu").await;
    server.get_json("/mock/petpooja/unknown").await;

    let body = server.get_json("/mock/petpooja/health").await;
    assert_eq!(body["service"], "mock-petpooja");
    assert_eq!(body["requests"], 2);
}

#[tokio::test]
async fn test_pos_catch_all_wrong_method() {
    let server = TestServer::spawn().await;

    let response = server.request(reqwest::Method::PUT, "/mock/petpooja/menu").await;
    assert_status(&response, 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["mock"], true);
    assert_eq!(body["path"], "/menu");
    assert_eq!(body["method"], "PUT");
}
