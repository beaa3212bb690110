//! Flat rows returned by the kitchen and delivery listings

use super::{OrderStatus, OrderType, PaymentStatus};
use crate::models::{Customization, CustomerContact, LineItem};
use serde::{Deserialize, Serialize};

/// One kitchen queue row per product line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KitchenQueueRow {
    pub order_number: String,
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_id: Option<String>,
    pub order_type: OrderType,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    pub status: OrderStatus,
}

/// One order (quicksip) or one day (freshplan) a delivery worker may take
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOrderRow {
    pub order_number: String,
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_id: Option<String>,
    pub order_type: OrderType,
    pub customer: CustomerContact,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub time_slot: String,
}
