//! Unified error codes for the order service
//!
//! This module defines all error codes used by order-server and its clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Delivery errors
//! - 8xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Day not found in the plan schedule
    DayNotFound = 4002,
    /// Day id is required for this order type
    DayRequired = 4003,
    /// Status value is not allowed for this operation
    InvalidStatus = 4004,
    /// Order or day has been cancelled
    OrderCancelled = 4005,
    /// Order or day has already been delivered
    OrderAlreadyDelivered = 4006,
    /// Order was modified concurrently
    OrderVersionConflict = 4007,

    // ==================== 5xxx: Payment ====================
    /// Payment has already been completed
    PaymentAlreadyCompleted = 5001,
    /// Payment is not cash on delivery
    PaymentNotCod = 5002,
    /// Payment requires a delivered order or day
    PaymentNotDelivered = 5003,
    /// Payment must be collected on the first delivery day
    PaymentNotFirstDay = 5004,

    // ==================== 6xxx: Delivery ====================
    /// No delivery slot starts at the requested hour
    NoDeliverySlot = 6001,
    /// Delivery person is not active for the slot
    SlotNotActive = 6002,
    /// Unknown time slot label
    UnknownTimeSlot = 6003,

    // ==================== 8xxx: User ====================
    /// User not found
    UserNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Required role is missing",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::DayNotFound => "Day not found",
            ErrorCode::DayRequired => "dayId is required for freshplan orders",
            ErrorCode::InvalidStatus => "Invalid status",
            ErrorCode::OrderCancelled => "Order has been cancelled",
            ErrorCode::OrderAlreadyDelivered => "Order has already been delivered",
            ErrorCode::OrderVersionConflict => "Order was modified by another request",

            // Payment
            ErrorCode::PaymentAlreadyCompleted => "paymentStatus already completed",
            ErrorCode::PaymentNotCod => "Payment is not cash on delivery",
            ErrorCode::PaymentNotDelivered => "Payment can only be collected after delivery",
            ErrorCode::PaymentNotFirstDay => {
                "payment can only be collected on the first delivery day"
            }

            // Delivery
            ErrorCode::NoDeliverySlot => "no delivery slot available",
            ErrorCode::SlotNotActive => "not active for this time slot",
            ErrorCode::UnknownTimeSlot => "Unknown time slot",

            // User
            ErrorCode::UserNotFound => "User not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::DayNotFound),
            4003 => Ok(ErrorCode::DayRequired),
            4004 => Ok(ErrorCode::InvalidStatus),
            4005 => Ok(ErrorCode::OrderCancelled),
            4006 => Ok(ErrorCode::OrderAlreadyDelivered),
            4007 => Ok(ErrorCode::OrderVersionConflict),

            // Payment
            5001 => Ok(ErrorCode::PaymentAlreadyCompleted),
            5002 => Ok(ErrorCode::PaymentNotCod),
            5003 => Ok(ErrorCode::PaymentNotDelivered),
            5004 => Ok(ErrorCode::PaymentNotFirstDay),

            // Delivery
            6001 => Ok(ErrorCode::NoDeliverySlot),
            6002 => Ok(ErrorCode::SlotNotActive),
            6003 => Ok(ErrorCode::UnknownTimeSlot),

            // User
            8001 => Ok(ErrorCode::UserNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::PaymentAlreadyCompleted.code(), 5001);
        assert_eq!(ErrorCode::NoDeliverySlot.code(), 6001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(4002), Ok(ErrorCode::DayNotFound));
        assert_eq!(ErrorCode::try_from(5004), Ok(ErrorCode::PaymentNotFirstDay));
        assert_eq!(ErrorCode::try_from(6002), Ok(ErrorCode::SlotNotActive));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(
            InvalidErrorCode(4999).to_string(),
            "invalid error code: 4999"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::DayNotFound).unwrap();
        assert_eq!(json, "4002");
        let code: ErrorCode = serde_json::from_str("5001").unwrap();
        assert_eq!(code, ErrorCode::PaymentAlreadyCompleted);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::OrderNotFound.to_string(), "E4001");
    }

    #[test]
    fn test_business_rule_messages() {
        assert_eq!(
            ErrorCode::PaymentAlreadyCompleted.message(),
            "paymentStatus already completed"
        );
        assert_eq!(
            ErrorCode::PaymentNotFirstDay.message(),
            "payment can only be collected on the first delivery day"
        );
        assert_eq!(ErrorCode::NoDeliverySlot.message(), "no delivery slot available");
        assert_eq!(ErrorCode::SlotNotActive.message(), "not active for this time slot");
    }
}
