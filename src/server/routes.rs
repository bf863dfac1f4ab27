//! Route definitions
//!
//! Each service router is mounted under its [`Service::mount`] prefix.
//! Every route carries a method fallback and every router a path
//! fallback, so nothing inside a service namespace answers 404 or 405.
//!
//! [`Service::mount`]: crate::types::Service::mount

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::state::AppState;

const VENDOR_ORDER: &str = "/v1.0/store/channel/vendor/order";

/// 2Factor SMS/OTP routes
pub fn otp_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/health",
            get(handlers::otp_health).fallback(handlers::otp_catch_all),
        )
        .route(
            "/API/V1/:key/SMS/:mobile/:otp",
            get(handlers::send_otp).fallback(handlers::otp_catch_all),
        )
        .fallback(handlers::otp_catch_all)
}

/// Petpooja POS routes
pub fn pos_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/health",
            get(handlers::pos_health).fallback(handlers::pos_catch_all),
        )
        .route(
            "/order/push",
            post(handlers::pos_push_order).fallback(handlers::pos_catch_all),
        )
        .route(
            "/menu",
            get(handlers::pos_menu).fallback(handlers::pos_catch_all),
        )
        .route(
            "/order/status",
            post(handlers::pos_order_status).fallback(handlers::pos_catch_all),
        )
        .fallback(handlers::pos_catch_all)
}

/// Pidge delivery routes
pub fn delivery_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/health",
            get(handlers::delivery_health).fallback(handlers::delivery_catch_all),
        )
        // Auth
        .route(
            "/v1.0/store/auth/token",
            post(handlers::delivery_auth_token).fallback(handlers::delivery_catch_all),
        )
        // Orders
        .route(
            VENDOR_ORDER,
            post(handlers::delivery_create_order).fallback(handlers::delivery_catch_all),
        )
        .route(
            &format!("{VENDOR_ORDER}/fulfill"),
            post(handlers::delivery_fulfill)
                .get(handlers::delivery_fulfill_status)
                .fallback(handlers::delivery_catch_all),
        )
        .route(
            &format!("{VENDOR_ORDER}/fulfill/smart"),
            post(handlers::delivery_smart_fulfill).fallback(handlers::delivery_catch_all),
        )
        .route(
            &format!("{VENDOR_ORDER}/:order_id"),
            get(handlers::delivery_order_status).fallback(handlers::delivery_catch_all),
        )
        .route(
            &format!("{VENDOR_ORDER}/:order_id/cancel"),
            post(handlers::delivery_cancel_order).fallback(handlers::delivery_catch_all),
        )
        // Tracking
        .route(
            "/v1.0/store/tracking/rider-location",
            get(handlers::delivery_rider_location).fallback(handlers::delivery_catch_all),
        )
        // Quotes
        .route(
            "/v1.0/store/channel/vendor/quote",
            post(handlers::delivery_quote).fallback(handlers::delivery_catch_all),
        )
        .route(
            "/v1.0/store/quote",
            post(handlers::delivery_legacy_quote).fallback(handlers::delivery_catch_all),
        )
        .fallback(handlers::delivery_catch_all)
}

/// Gateway health and metrics routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::gateway_health))
        .route("/metrics", get(handlers::metrics))
}
