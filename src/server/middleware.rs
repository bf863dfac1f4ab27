//! HTTP middleware

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info};

use super::state::AppState;

/// Response header carrying the gateway-wide request number
pub const SEQUENCE_HEADER: &str = "x-request-sequence";

/// Gateway-wide sequence number of the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSequence(pub u64);

/// Numbers every request, tracks it as in-flight and records its
/// duration. Runs in front of all routing, so unknown paths are
/// numbered too.
pub async fn request_sequence_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let sequence = state.engine.counters().next_sequence();
    request.extensions_mut().insert(RequestSequence(sequence));

    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let guard = state.shutdown.track();
    let mut response = next.run(request).await;
    drop(guard);

    let duration = start.elapsed();
    state.metrics.record_request(duration);

    response
        .headers_mut()
        .insert(SEQUENCE_HEADER, HeaderValue::from(sequence));

    if state.config.server.request_logging {
        info!(
            sequence,
            method = %method,
            uri = %uri,
            status = response.status().as_u16(),
            duration_ms = duration.as_millis() as u64,
            "Request handled"
        );
    } else {
        debug!(sequence, method = %method, uri = %uri, "Request handled");
    }

    response
}
