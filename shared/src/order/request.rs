//! Request payloads for lifecycle commands
//!
//! Status fields arrive as plain strings and are parsed into
//! [`KitchenStatus`](super::KitchenStatus) / [`DeliveryStatus`](super::DeliveryStatus)
//! so an unknown value surfaces as `InvalidStatus` rather than a body
//! deserialization failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// POST /api/chef/update-item-status
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItemStatusUpdate {
    #[validate(length(min = 1, message = "orderId is required"))]
    pub order_id: String,
    #[serde(default)]
    pub day_id: Option<String>,
    pub status: String,
    /// Backdated stamp; server time when absent
    #[serde(default)]
    pub chef_time: Option<DateTime<Utc>>,
}

/// POST /api/delivery/update-status
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStatusUpdate {
    #[validate(length(min = 1, message = "orderId is required"))]
    pub order_id: String,
    #[serde(default)]
    pub day_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub delivery_time: Option<DateTime<Utc>>,
}

/// POST /api/delivery/confirm-payment
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CodPaymentConfirm {
    #[validate(length(min = 1, message = "orderId is required"))]
    pub order_id: String,
    #[serde(default)]
    pub day_id: Option<String>,
}

/// POST /api/delivery/orders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct EligibleOrdersRequest {
    #[validate(range(max = 23, message = "hour must be 0-23"))]
    pub hour: u32,
    #[validate(range(max = 59, message = "minutes must be 0-59"))]
    pub minutes: u32,
}

/// POST /api/orders/cancel
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    #[validate(length(min = 1, message = "orderId is required"))]
    pub order_id: String,
    #[serde(default)]
    pub day_id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

/// PUT /api/delivery/active-slots
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSlotsUpdate {
    #[validate(length(max = 24))]
    pub time_slots: Vec<String>,
}

/// Query string of the kitchen queue routes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueQuery {
    /// `YYYY-MM-DD`; today in the business timezone when absent
    #[serde(default)]
    pub date: Option<String>,
}
