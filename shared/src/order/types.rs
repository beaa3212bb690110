//! Status vocabularies for the order lifecycle

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Order Type
// ============================================================================

/// 订单类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Single-shot order
    QuickSip,
    /// Multi-day subscription, one Day per delivery date
    FreshPlan,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuickSip => "quicksip",
            Self::FreshPlan => "freshplan",
        }
    }
}

// ============================================================================
// Stored Status
// ============================================================================

/// Stored status of an order (quicksip) or a day (freshplan)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Received,
    Done,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Received => "received",
            Self::Done => "done",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Command Vocabularies
// ============================================================================

/// 厨房状态指令
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KitchenStatus {
    Received,
    Done,
}

impl KitchenStatus {
    pub fn stored_status(&self) -> OrderStatus {
        match self {
            Self::Received => OrderStatus::Received,
            Self::Done => OrderStatus::Done,
        }
    }
}

impl FromStr for KitchenStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "received" => Ok(Self::Received),
            "done" => Ok(Self::Done),
            other => Err(AppError::with_message(
                ErrorCode::InvalidStatus,
                format!("Invalid kitchen status: {other}"),
            )
            .with_detail("allowed", vec!["received", "done"])),
        }
    }
}

/// 配送状态指令
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStatus {
    Picked,
    Delivered,
    NotDelivered,
}

impl DeliveryStatus {
    /// Fixed mapping onto the stored vocabulary.
    ///
    /// `not-delivered` is stored as `cancelled`; use
    /// `Fulfillment::outcome` to tell the two apart when reading.
    pub fn stored_status(&self) -> OrderStatus {
        match self {
            Self::Picked => OrderStatus::OutForDelivery,
            Self::Delivered => OrderStatus::Delivered,
            Self::NotDelivered => OrderStatus::Cancelled,
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "picked" => Ok(Self::Picked),
            "delivered" => Ok(Self::Delivered),
            "not-delivered" => Ok(Self::NotDelivered),
            other => Err(AppError::with_message(
                ErrorCode::InvalidStatus,
                format!("Invalid delivery status: {other}"),
            )
            .with_detail("allowed", vec!["picked", "delivered", "not-delivered"])),
        }
    }
}

// ============================================================================
// Payment
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Cash on delivery, not yet collected
    #[default]
    Cod,
    Completed,
    Pending,
}
