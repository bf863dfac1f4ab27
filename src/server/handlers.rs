//! HTTP request handlers
//!
//! Every simulated endpoint follows the same pattern: admit the
//! request into its service (count + injected latency), then
//! synthesize the response. None of them can fail.

use axum::{
    extract::{Path, Query, State},
    http::{Method, Uri},
    Json,
};
use chrono::Utc;

use super::extract::LenientJson;
use super::state::AppState;
use crate::latency::Workload;
use crate::providers::{mock_echo, petpooja, pidge, two_factor};
use crate::types::*;

async fn service_health(state: &AppState, service: Service) -> Json<ServiceHealth> {
    state.engine.idle().await;
    Json(ServiceHealth::healthy(
        service.health_name(),
        state.engine.counters().count(service),
    ))
}

async fn mock_catch_all(state: &AppState, service: Service, method: Method, uri: Uri) -> Json<CatchAllResponse> {
    state.engine.admit(service, Workload::Standard).await;
    Json(mock_echo(uri.path(), method.as_str()))
}

// ============== Gateway Handlers ==============

/// GET /health
pub async fn gateway_health(State(state): State<AppState>) -> Json<ServiceHealth> {
    state.engine.idle().await;
    Json(ServiceHealth::healthy(
        state.config.telemetry.service_name.clone(),
        state.engine.counters().total(),
    ))
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.export(
        &state.engine.counters().snapshot(),
        state.shutdown.in_flight_count(),
    )
}

// ============== 2Factor Handlers ==============

/// GET /mock/otp/health
pub async fn otp_health(State(state): State<AppState>) -> Json<ServiceHealth> {
    service_health(&state, Service::Otp).await
}

/// GET /mock/otp/API/V1/:key/SMS/:mobile/:otp
pub async fn send_otp(
    State(state): State<AppState>,
    Path(params): Path<SendOtpParams>,
) -> Json<SendOtpResponse> {
    state.engine.admit(Service::Otp, Workload::Standard).await;
    let response = two_factor::send_otp(
        state.engine.otp_registry(),
        &params,
        &mut *state.engine.rng(),
    );
    Json(response)
}

/// Any other /mock/otp path
pub async fn otp_catch_all(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Json<CatchAllResponse> {
    mock_catch_all(&state, Service::Otp, method, uri).await
}

// ============== Petpooja Handlers ==============

/// GET /mock/petpooja/health
pub async fn pos_health(State(state): State<AppState>) -> Json<ServiceHealth> {
    service_health(&state, Service::Pos).await
}

/// POST /mock/petpooja/order/push
pub async fn pos_push_order(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<PushOrderRequest>,
) -> Json<PushOrderResponse> {
    state.engine.admit(Service::Pos, Workload::Standard).await;
    Json(petpooja::push_order(&request, Utc::now()))
}

/// GET /mock/petpooja/menu
pub async fn pos_menu(State(state): State<AppState>) -> Json<MenuResponse> {
    state.engine.admit(Service::Pos, Workload::Standard).await;
    Json(petpooja::menu(Utc::now()))
}

/// POST /mock/petpooja/order/status
pub async fn pos_order_status(State(state): State<AppState>) -> Json<OrderStatusUpdateResponse> {
    state.engine.admit(Service::Pos, Workload::Standard).await;
    Json(petpooja::update_order_status())
}

/// Any other /mock/petpooja path
pub async fn pos_catch_all(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Json<CatchAllResponse> {
    mock_catch_all(&state, Service::Pos, method, uri).await
}

// ============== Pidge Handlers ==============

/// GET /mock/pidge/health
pub async fn delivery_health(State(state): State<AppState>) -> Json<ServiceHealth> {
    service_health(&state, Service::Delivery).await
}

/// POST /mock/pidge/v1.0/store/auth/token
pub async fn delivery_auth_token(State(state): State<AppState>) -> Json<Envelope<AuthToken>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    Json(pidge::auth_token(Utc::now()))
}

/// POST /mock/pidge/v1.0/store/channel/vendor/order
pub async fn delivery_create_order(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<CreateOrderRequest>,
) -> Json<Envelope<TripMapping>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    let response = pidge::create_order(&request, &mut *state.engine.rng(), Utc::now());
    Json(response)
}

/// POST /mock/pidge/v1.0/store/channel/vendor/order/fulfill
pub async fn delivery_fulfill(State(state): State<AppState>) -> Json<Envelope<FulfillResult>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    Json(pidge::fulfill())
}

/// GET /mock/pidge/v1.0/store/channel/vendor/order/fulfill
///
/// Shares its path with the fulfill POST; a GET reads `fulfill` as an order id.
pub async fn delivery_fulfill_status(State(state): State<AppState>) -> Json<Envelope<OrderStatus>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    let response = pidge::order_status("fulfill", &mut *state.engine.rng(), Utc::now());
    Json(response)
}

/// POST /mock/pidge/v1.0/store/channel/vendor/order/fulfill/smart
pub async fn delivery_smart_fulfill(State(state): State<AppState>) -> Json<Envelope<FulfillResult>> {
    state.engine.admit(Service::Delivery, Workload::Heavy).await;
    Json(pidge::fulfill())
}

/// GET /mock/pidge/v1.0/store/channel/vendor/order/:order_id
pub async fn delivery_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Json<Envelope<OrderStatus>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    let response = pidge::order_status(&order_id, &mut *state.engine.rng(), Utc::now());
    Json(response)
}

/// GET /mock/pidge/v1.0/store/tracking/rider-location
pub async fn delivery_rider_location(
    State(state): State<AppState>,
    query: Option<Query<RiderLocationQuery>>,
) -> Json<Envelope<RiderLocation>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let response = pidge::rider_location(&query, &mut *state.engine.rng());
    Json(response)
}

/// POST /mock/pidge/v1.0/store/channel/vendor/order/:order_id/cancel
pub async fn delivery_cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Json<Envelope<CancelResult>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    Json(pidge::cancel_order(&order_id, Utc::now()))
}

/// POST /mock/pidge/v1.0/store/channel/vendor/quote
pub async fn delivery_quote(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<QuoteRequest>,
) -> Json<Envelope<QuoteResult>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    let response = pidge::quote(&request, &mut *state.engine.rng(), Utc::now());
    Json(response)
}

/// POST /mock/pidge/v1.0/store/quote
pub async fn delivery_legacy_quote(State(state): State<AppState>) -> Json<Envelope<LegacyQuote>> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    let response = pidge::legacy_quote(&mut *state.engine.rng(), Utc::now());
    Json(response)
}

/// Any other /mock/pidge path
pub async fn delivery_catch_all(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Json<CatchAllResponse> {
    state.engine.admit(Service::Delivery, Workload::Standard).await;
    Json(pidge::catch_all(uri.path(), method.as_str()))
}
