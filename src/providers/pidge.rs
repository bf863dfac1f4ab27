//! Pidge delivery partner API
//!
//! Order status is drawn fresh on every query; no per-order state is
//! kept between calls, so two queries for the same order can disagree.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use super::{delivery_id, epoch_millis, iso_timestamp};
use crate::types::*;

/// Reference point rider coordinates are jittered around (Chennai)
pub const BASE_LATITUDE: f64 = 13.0827;
pub const BASE_LONGITUDE: f64 = 80.2707;

/// Maximum jitter added to each axis
pub const COORDINATE_JITTER: f64 = 0.05;

/// Rider reported when the caller names none
pub const DEFAULT_RIDER_ID: &str = "RIDER-001";

/// Lifetime of an auth token, in seconds
pub const TOKEN_TTL_SECS: u64 = 3600;

/// Fixed price of the quoted option
pub const QUOTE_PRICE: f64 = 138.27;
pub const PICKUP_ETA_MIN: u32 = 15;
pub const DROP_ETA_MIN: u32 = 30;

/// Legacy quotes stay valid this long
pub const LEGACY_QUOTE_VALIDITY_MIN: i64 = 10;

/// `POST /v1.0/store/auth/token`
pub fn auth_token(now: DateTime<Utc>) -> Envelope<AuthToken> {
    Envelope::ok(AuthToken {
        token: format!("mock-pidge-token-{}", epoch_millis(now)),
        expires_in: TOKEN_TTL_SECS,
    })
}

/// `POST /v1.0/store/channel/vendor/order`
///
/// Maps each usable `source_order_id` to a fresh delivery id. Without
/// any usable id the mapping holds a single `default` entry.
pub fn create_order<R: Rng>(
    request: &CreateOrderRequest,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Envelope<TripMapping> {
    let mut mapping = TripMapping::new();

    for trip in request.trips() {
        if let Some(key) = trip.source_order_id.as_ref().and_then(truthy_key) {
            mapping.insert(key, Value::String(delivery_id(rng, now)));
        }
    }

    if mapping.is_empty() {
        mapping.insert("default".to_string(), Value::String(delivery_id(rng, now)));
    }

    Envelope::bare(mapping)
}

/// `POST .../order/fulfill` and `POST .../order/fulfill/smart`
pub fn fulfill() -> Envelope<FulfillResult> {
    Envelope::bare(FulfillResult {
        fulfilled: false,
        message: "Allocation successful".to_string(),
        quote: None,
        network_id: 0,
        network_name: None,
    })
}

/// `GET .../order/:order_id`
pub fn order_status<R: Rng>(
    order_id: &str,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Envelope<OrderStatus> {
    let status = *DeliveryStatus::PROGRESS
        .choose(rng)
        .unwrap_or(&DeliveryStatus::Created);
    let (lat, lng) = jittered_coordinate(rng);

    Envelope::ok(OrderStatus {
        order_id: order_id.to_string(),
        status,
        rider_location: LatLng { lat, lng },
        updated_at: iso_timestamp(now),
    })
}

/// `GET /v1.0/store/tracking/rider-location`
pub fn rider_location<R: Rng>(query: &RiderLocationQuery, rng: &mut R) -> Envelope<RiderLocation> {
    let rider_id = query
        .rider_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_RIDER_ID);
    let (latitude, longitude) = jittered_coordinate(rng);

    Envelope::ok(RiderLocation {
        rider_id: rider_id.to_string(),
        location: GeoPoint { latitude, longitude },
    })
}

/// `POST .../order/:order_id/cancel`
pub fn cancel_order(order_id: &str, now: DateTime<Utc>) -> Envelope<CancelResult> {
    Envelope::ok(CancelResult {
        order_id: order_id.to_string(),
        status: DeliveryStatus::Cancelled,
        cancelled_at: iso_timestamp(now),
    })
}

/// `POST /v1.0/store/channel/vendor/quote`
pub fn quote<R: Rng>(request: &QuoteRequest, rng: &mut R, now: DateTime<Utc>) -> Envelope<QuoteResult> {
    let drop_ref = request
        .first_drop_ref()
        .filter(|r| is_truthy(r))
        .cloned()
        .unwrap_or_else(|| Value::String(format!("PGQ{}", epoch_millis(now))));
    let distance = rng.gen_range(2000..10000);

    let eta = Eta {
        pickup: iso_timestamp(now + Duration::minutes(PICKUP_ETA_MIN as i64)),
        pickup_min: PICKUP_ETA_MIN,
        drop: iso_timestamp(now + Duration::minutes(DROP_ETA_MIN as i64)),
        drop_min: DROP_ETA_MIN,
    };

    Envelope::bare(QuoteResult {
        distance: vec![DropDistance {
            reference: drop_ref,
            distance,
        }],
        items: vec![QuoteOption {
            network_id: 2,
            network_name: "wefast".to_string(),
            service: "wefast".to_string(),
            pickup_now: true,
            quote: PriceQuote {
                price: QUOTE_PRICE,
                distance,
                eta,
            },
            error: None,
        }],
    })
}

/// `POST /v1.0/store/quote`
pub fn legacy_quote<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Envelope<LegacyQuote> {
    let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid().to_string();

    Envelope::ok(LegacyQuote {
        quote_id: format!("QUOTE-{}", &id[..8]),
        delivery_fee: rng.gen_range(30..80),
        distance_km: rng.gen_range(1..11),
        estimated_time_minutes: rng.gen_range(20..50),
        valid_until: iso_timestamp(now + Duration::minutes(LEGACY_QUOTE_VALIDITY_MIN)),
    })
}

/// Catch-all for unmodelled delivery paths
pub fn catch_all(path: &str, method: &str) -> CatchAllResponse {
    CatchAllResponse {
        success: true,
        mock: None,
        message: Some("Mock endpoint - not specifically implemented".to_string()),
        path: path.to_string(),
        method: method.to_string(),
    }
}

/// A point within [`COORDINATE_JITTER`] north-east of the reference point
pub fn jittered_coordinate<R: Rng>(rng: &mut R) -> (f64, f64) {
    (
        BASE_LATITUDE + rng.gen_range(0.0..COORDINATE_JITTER),
        BASE_LONGITUDE + rng.gen_range(0.0..COORDINATE_JITTER),
    )
}
