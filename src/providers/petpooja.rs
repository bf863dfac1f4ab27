//! Petpooja point-of-sale integration

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{epoch_millis, iso_timestamp};
use crate::types::{
    is_truthy, Menu, MenuResponse, OrderStatusUpdateResponse, PushOrderRequest,
    PushOrderResponse,
};

/// `POST /order/push`
pub fn push_order(request: &PushOrderRequest, now: DateTime<Utc>) -> PushOrderResponse {
    let millis = epoch_millis(now);
    let order_id = request
        .order_id
        .as_ref()
        .filter(|id| is_truthy(id))
        .cloned()
        .unwrap_or_else(|| Value::String(format!("PP-{}", millis)));

    PushOrderResponse {
        success: true,
        order_id,
        pos_order_id: format!("POS-{}", millis),
        message: "Order received successfully".to_string(),
    }
}

/// `GET /menu`: an empty menu skeleton
pub fn menu(now: DateTime<Utc>) -> MenuResponse {
    MenuResponse {
        success: true,
        menu: Menu {
            categories: Vec::new(),
            items: Vec::new(),
            last_updated: iso_timestamp(now),
        },
    }
}

/// `POST /order/status`: every update is accepted
pub fn update_order_status() -> OrderStatusUpdateResponse {
    OrderStatusUpdateResponse {
        success: true,
        status: "ACCEPTED".to_string(),
    }
}
