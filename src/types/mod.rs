//! Wire types for the simulated services
//!
//! Request and response shapes mirror the real 2Factor, Petpooja and
//! Pidge APIs closely enough for existing load-test clients.

mod request;
mod response;

pub use request::*;
pub use response::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Simulated third-party services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// 2Factor SMS/OTP gateway
    Otp,
    /// Petpooja point-of-sale
    Pos,
    /// Pidge delivery partner
    Delivery,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::Otp, Service::Pos, Service::Delivery];

    /// Path prefix the service is mounted under
    pub fn mount(&self) -> &'static str {
        match self {
            Self::Otp => "/mock/otp",
            Self::Pos => "/mock/petpooja",
            Self::Delivery => "/mock/pidge",
        }
    }

    /// Name reported by the service's health probe
    pub fn health_name(&self) -> &'static str {
        match self {
            Self::Otp => "mock-sms-2factor",
            Self::Pos => "mock-petpooja",
            Self::Delivery => "mock-pidge",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Otp => write!(f, "otp"),
            Self::Pos => write!(f, "pos"),
            Self::Delivery => write!(f, "delivery"),
        }
    }
}

impl std::str::FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "otp" | "2factor" => Ok(Self::Otp),
            "pos" | "petpooja" => Ok(Self::Pos),
            "delivery" | "pidge" => Ok(Self::Delivery),
            _ => Err(format!("Unknown service: {}", s)),
        }
    }
}

/// JavaScript-style truthiness, used wherever a caller-supplied field
/// is echoed back only when "present"
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a truthy JSON scalar as a map key
pub fn truthy_key(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
