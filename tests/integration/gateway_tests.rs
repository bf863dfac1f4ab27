//! Gateway-wide behaviour: health, counters, latency and metrics

use std::time::{Duration, Instant};

use super::common::*;
use futures_util::future::join_all;
use mock_gateway::types::Service;
use serde_json::json;

#[tokio::test]
async fn test_gateway_health_counts_every_request() {
    let server = TestServer::spawn().await;

    server.get_json("/mock/petpooja/menu").await;
    server.get_json("/mock/otp/health").await;
    let unknown = server.get("/not/mounted").await;
    assert_status(&unknown, 404);

    let body = server.get_json("/health").await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "hyp-mock-gateway");
    assert_eq!(body["requests"], 4);
}

#[tokio::test]
async fn test_sequence_header_increments() {
    let server = TestServer::spawn().await;

    let mut previous = 0;
    for _ in 0..3 {
        let response = server.get("/health").await;
        let sequence: u64 = response
            .headers()
            .get("x-request-sequence")
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(sequence, previous + 1);
        previous = sequence;
    }
}

#[tokio::test]
async fn test_service_counters_are_independent() {
    let server = TestServer::spawn().await;

    server.get_json("/mock/otp/API/V1/k/SMS/9000000010/1").await;
    server.get_json("/mock/petpooja/menu").await;
    server.get_json("/mock/petpooja/menu").await;
    server.post_json("/mock/pidge/v1.0/store/quote", json!({})).await;
    server.post_json("/mock/pidge/v1.0/store/quote", json!({})).await;
    server.post_json("/mock/pidge/v1.0/store/quote", json!({})).await;

    let counters = server.state.engine.counters().snapshot();
    assert_eq!(counters.get(Service::Otp), 1);
    assert_eq!(counters.get(Service::Pos), 2);
    assert_eq!(counters.get(Service::Delivery), 3);
    assert_eq!(counters.total, 6);
}

#[tokio::test]
async fn test_concurrent_requests_are_all_counted() {
    let server = TestServer::spawn_with_delay(20).await;

    let requests = (0..50).map(|_| server.get("/mock/petpooja/menu"));
    let responses = join_all(requests).await;
    assert!(responses.iter().all(|r| r.status().is_success()));

    let body = server.get_json("/mock/petpooja/health").await;
    assert_eq!(body["requests"], 50);
}

#[tokio::test]
async fn test_concurrent_delays_overlap() {
    let server = TestServer::spawn_with_delay(200).await;

    let start = Instant::now();
    let requests = (0..10).map(|_| server.get("/mock/petpooja/menu"));
    join_all(requests).await;

    // Ten serialized 200ms waits would take two seconds
    assert!(start.elapsed() < Duration::from_millis(1500));
}

#[tokio::test]
async fn test_base_delay_is_applied() {
    let server = TestServer::spawn_with_delay(100).await;

    let start = Instant::now();
    server.get_json("/mock/petpooja/menu").await;
    assert!(start.elapsed() >= Duration::from_millis(100));

    let start = Instant::now();
    server.get_json("/health").await;
    assert!(start.elapsed() >= Duration::from_millis(100));
}

#[tokio::test]
async fn test_smart_fulfill_is_slower() {
    let server = TestServer::spawn_with_delay(100).await;
    let path = "/mock/pidge/v1.0/store/channel/vendor/order/fulfill/smart";

    let start = Instant::now();
    server.post_json(path, json!({})).await;
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_zero_delay_responds_quickly() {
    let server = TestServer::spawn().await;

    let start = Instant::now();
    for _ in 0..10 {
        server.get_json("/mock/petpooja/menu").await;
    }
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_metrics_export() {
    let server = TestServer::spawn().await;

    server.get_json("/mock/petpooja/menu").await;
    server.get_json("/mock/pidge/anything").await;

    let response = server.get("/metrics").await;
    assert_status(&response, 200);
    let text = response.text().await.unwrap();

    assert!(text.contains("mock_gateway_requests_total 3"));
    assert!(text.contains("mock_gateway_service_requests_total{service=\"pos\"} 1"));
    assert!(text.contains("mock_gateway_service_requests_total{service=\"delivery\"} 1"));
    assert!(text.contains("mock_gateway_service_requests_total{service=\"otp\"} 0"));
    assert!(text.contains("mock_gateway_request_duration_seconds_count 2"));
}

#[tokio::test]
async fn test_seeded_gateways_agree() {
    let mut config = mock_gateway::GatewayConfig::default();
    config.latency.response_delay_ms = 0;
    config.seed = Some(1234);

    let first = TestServer::spawn_with_config(config.clone()).await;
    let second = TestServer::spawn_with_config(config).await;

    let path = "/mock/pidge/v1.0/store/tracking/rider-location";
    let a = first.get_json(path).await;
    let b = second.get_json(path).await;
    assert_eq!(a["data"]["location"], b["data"]["location"]);
}
