//! Common test utilities for integration tests

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::sync::oneshot;

use mock_gateway::{
    config::GatewayConfig,
    server::{create_router, AppState},
};

/// Test server wrapper
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub base_url: String,
    pub state: AppState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawn a test server with no injected delay
    pub async fn spawn() -> Self {
        Self::spawn_with_delay(0).await
    }

    /// Spawn a test server with the given base delay
    pub async fn spawn_with_delay(delay_ms: u64) -> Self {
        let mut config = GatewayConfig::default();
        config.latency.response_delay_ms = delay_ms;
        config.server.request_logging = false;
        Self::spawn_with_config(config).await
    }

    /// Spawn a test server with custom configuration
    pub async fn spawn_with_config(mut config: GatewayConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        config.server.host = "127.0.0.1".to_string();
        config.server.port = addr.port();

        let state = AppState::new(config);
        let app = create_router(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        Self {
            addr,
            client,
            base_url: format!("http://{}", addr),
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    /// Send a POST request with JSON body
    pub async fn post(&self, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    /// Send a POST request with a raw body
    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    /// Send a request with an arbitrary method and no body
    pub async fn request(&self, method: reqwest::Method, path: &str) -> reqwest::Response {
        self.client
            .request(method, self.url(path))
            .send()
            .await
            .unwrap()
    }

    /// GET and decode the JSON body, asserting a 200
    pub async fn get_json(&self, path: &str) -> Value {
        let response = self.get(path).await;
        assert_status(&response, 200);
        response.json().await.unwrap()
    }

    /// POST and decode the JSON body, asserting a 200
    pub async fn post_json(&self, path: &str, body: Value) -> Value {
        let response = self.post(path, body).await;
        assert_status(&response, 200);
        response.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Assert response status
pub fn assert_status(response: &reqwest::Response, expected: u16) {
    assert_eq!(
        response.status().as_u16(),
        expected,
        "Expected status {}, got {}",
        expected,
        response.status()
    );
}

/// Assert JSON field exists
pub fn assert_json_field(json: &Value, field: &str) {
    assert!(
        json.get(field).is_some(),
        "Expected field '{}' to exist in {:?}",
        field,
        json
    );
}

/// Parse an ISO-8601 UTC timestamp with millisecond precision
pub fn parse_timestamp(value: &Value) -> chrono::DateTime<chrono::Utc> {
    let text = value.as_str().expect("timestamp should be a string");
    assert!(text.ends_with('Z'), "timestamp {text} should be UTC");
    chrono::DateTime::parse_from_rfc3339(text)
        .expect("timestamp should be RFC 3339")
        .with_timezone(&chrono::Utc)
}
