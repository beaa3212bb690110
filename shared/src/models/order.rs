//! Order document model
//!
//! One JSON document per order. The `orderType` tag selects the variant:
//! a `quicksip` order carries its own fulfillment state, a `freshplan`
//! order owns a schedule of days and each day carries its own.

use crate::order::{OrderStatus, OrderType, PaymentStatus};
use crate::util;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Chosen customization of a line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub final_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,
    #[serde(default)]
    pub unit_price: f64,
    /// Per-item slot (freshplan)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
}

/// 厨房标记
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub chef_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_time: Option<DateTime<Utc>>,
}

/// 配送标记
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub delivery_person_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_delivered_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_delivered_reason: Option<String>,
}

/// Who cancelled, when and why
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cancellation {
    pub cancelled_by: String,
    pub cancelled_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// How a fulfillment unit ended up, reading through the stored status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still moving through the kitchen or on the road
    Open(OrderStatus),
    Delivered,
    /// Driver reported the customer unreachable
    NotDelivered,
    Cancelled,
}

/// Kitchen and delivery state of one fulfillment unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_info: Option<StatusInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<DeliveryInfo>,
}

impl Fulfillment {
    pub fn outcome(&self) -> Outcome {
        match self.status {
            OrderStatus::Delivered => Outcome::Delivered,
            OrderStatus::Cancelled => {
                let reported = self
                    .delivery_info
                    .as_ref()
                    .is_some_and(|d| d.not_delivered_time.is_some());
                if reported {
                    Outcome::NotDelivered
                } else {
                    Outcome::Cancelled
                }
            }
            other => Outcome::Open(other),
        }
    }

    /// Chef who stamped this unit, if any
    pub fn chef_id(&self) -> Option<&str> {
        self.status_info.as_ref().map(|s| s.chef_id.as_str())
    }
}

/// One delivery date of a freshplan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub id: String,
    /// Parent order id
    pub order_id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(flatten)]
    pub fulfillment: Fulfillment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation: Option<Cancellation>,
}

impl Day {
    /// Day-level slot, else the first item's slot
    pub fn resolved_slot(&self) -> Option<&str> {
        self.time_slot
            .as_deref()
            .or_else(|| self.items.first().and_then(|i| i.time_slot.as_deref()))
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickSip {
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(flatten)]
    pub fulfillment: Fulfillment,
    /// Slot label or [`crate::order::ASAP`]
    pub delivery_time_slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreshPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    /// Whole plan paid in one go (COD on the first day)
    #[serde(default)]
    pub is_complete_plan_checkout: bool,
    #[serde(default)]
    pub day_schedule: Vec<Day>,
}

impl FreshPlan {
    pub fn day(&self, day_id: &str) -> Option<&Day> {
        self.day_schedule.iter().find(|d| d.id == day_id)
    }

    pub fn day_mut(&mut self, day_id: &str) -> Option<&mut Day> {
        self.day_schedule.iter_mut().find(|d| d.id == day_id)
    }

    /// Earliest day by date; ties keep schedule order
    pub fn first_day(&self) -> Option<&Day> {
        self.day_schedule.iter().min_by_key(|d| d.date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "orderType", rename_all = "lowercase")]
pub enum OrderKind {
    QuickSip(QuickSip),
    FreshPlan(FreshPlan),
}

/// Order document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Owning customer
    pub user_id: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub delivery_charge: f64,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation: Option<Cancellation>,
    /// Bumped on every successful save
    #[serde(default)]
    pub version: u64,
    #[serde(flatten)]
    pub kind: OrderKind,
}

impl Order {
    pub fn order_type(&self) -> OrderType {
        match self.kind {
            OrderKind::QuickSip(_) => OrderType::QuickSip,
            OrderKind::FreshPlan(_) => OrderType::FreshPlan,
        }
    }

    /// Short display number: last 6 characters of the id, upper-cased
    pub fn order_number(&self) -> String {
        util::order_number(&self.id)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_some()
    }
}
