//! Response types for the simulated APIs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `GET .../health` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub service: String,
    pub requests: u64,
}

impl ServiceHealth {
    pub fn healthy(service: impl Into<String>, requests: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            requests,
        }
    }
}

/// Body returned for any unmodelled path of a service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchAllResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub path: String,
    pub method: String,
}

// ============== 2Factor ==============

/// 2Factor send-OTP response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Details")]
    pub details: String,
    #[serde(rename = "OTP")]
    pub otp: String,
}

// ============== Petpooja ==============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushOrderResponse {
    pub success: bool,
    pub order_id: Value,
    pub pos_order_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub success: bool,
    pub menu: Menu,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Menu {
    pub categories: Vec<Value>,
    pub items: Vec<Value>,
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdateResponse {
    pub success: bool,
    pub status: String,
}

// ============== Pidge ==============

/// Pidge response envelope; some endpoints omit `success`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub data: T,
}

impl<T> Envelope<T> {
    /// `{success: true, data}`
    pub fn ok(data: T) -> Self {
        Self {
            success: Some(true),
            data,
        }
    }

    /// `{data}`
    pub fn bare(data: T) -> Self {
        Self {
            success: None,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub expires_in: u64,
}

/// Source order id to generated delivery id, in trip order
pub type TripMapping = Map<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillResult {
    pub fulfilled: bool,
    pub message: String,
    pub quote: Option<Value>,
    pub network_id: u32,
    pub network_name: Option<String>,
}

/// Delivery lifecycle states reported by Pidge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Created,
    PickedUp,
    InTransit,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    /// States an order status query picks from
    pub const PROGRESS: [DeliveryStatus; 4] = [
        DeliveryStatus::Created,
        DeliveryStatus::PickedUp,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatus {
    pub order_id: String,
    pub status: DeliveryStatus,
    pub rider_location: LatLng,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderLocation {
    pub rider_id: String,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelResult {
    pub order_id: String,
    pub status: DeliveryStatus,
    pub cancelled_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResult {
    pub distance: Vec<DropDistance>,
    pub items: Vec<QuoteOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropDistance {
    #[serde(rename = "ref")]
    pub reference: Value,
    pub distance: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteOption {
    pub network_id: u32,
    pub network_name: String,
    pub service: String,
    pub pickup_now: bool,
    pub quote: PriceQuote,
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: f64,
    pub distance: u32,
    pub eta: Eta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Eta {
    pub pickup: String,
    pub pickup_min: u32,
    pub drop: String,
    pub drop_min: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyQuote {
    pub quote_id: String,
    pub delivery_fee: u32,
    pub distance_km: u32,
    pub estimated_time_minutes: u32,
    pub valid_until: String,
}
