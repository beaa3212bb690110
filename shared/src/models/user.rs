//! User Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role carried in the token `role` claim
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Chef,
    Delivery,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Chef => "chef",
            Self::Delivery => "delivery",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" | "user" => Ok(Self::Customer),
            "chef" => Ok(Self::Chef),
            "delivery" => Ok(Self::Delivery),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Slots a delivery worker has signed up for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryActiveInfo {
    #[serde(default)]
    pub time_slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_active_info: Option<DeliveryActiveInfo>,
}

impl User {
    /// Active slot labels, empty when the worker never registered any
    pub fn active_slots(&self) -> &[String] {
        self.delivery_active_info
            .as_ref()
            .map(|info| info.time_slots.as_slice())
            .unwrap_or(&[])
    }
}

/// Customer contact projected into delivery rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerContact {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl From<&User> for CustomerContact {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
        }
    }
}
