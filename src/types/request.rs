//! Request types for the simulated APIs
//!
//! Every field is optional: a body that is missing a field, or that
//! fails to parse altogether, falls back to these defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decodes an array element by element. An element that does not fit `T`
/// becomes `T::default()`; a value that is not an array becomes `None`.
fn lenient_elements<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        _ => return Ok(None),
    };

    Ok(Some(
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
    ))
}

/// Path parameters of `GET /API/V1/:key/SMS/:mobile/:otp`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpParams {
    pub key: String,
    pub mobile: String,
    pub otp: String,
}

/// Petpooja order push body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PushOrderRequest {
    pub order_id: Option<Value>,
}

/// Pidge order creation body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOrderRequest {
    #[serde(deserialize_with = "lenient_elements")]
    pub trips: Option<Vec<Trip>>,
}

impl CreateOrderRequest {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips: Some(trips) }
    }

    pub fn trips(&self) -> &[Trip] {
        self.trips.as_deref().unwrap_or_default()
    }
}

/// One trip of a Pidge order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trip {
    pub source_order_id: Option<Value>,
}

impl Trip {
    pub fn with_source(source_order_id: impl Into<String>) -> Self {
        Self {
            source_order_id: Some(Value::String(source_order_id.into())),
        }
    }
}

/// Pidge quote body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    #[serde(deserialize_with = "lenient_elements")]
    pub drop: Option<Vec<DropPoint>>,
}

impl QuoteRequest {
    /// Reference of the first drop point, if any
    pub fn first_drop_ref(&self) -> Option<&Value> {
        self.drop
            .as_deref()
            .and_then(|drops| drops.first())
            .and_then(|d| d.reference.as_ref())
    }
}

/// Drop point of a Pidge quote request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DropPoint {
    #[serde(rename = "ref")]
    pub reference: Option<Value>,
}

/// Query string of the rider location lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderLocationQuery {
    pub rider_id: Option<String>,
}
