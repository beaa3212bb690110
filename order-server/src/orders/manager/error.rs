use super::super::storage::StorageError;
use super::super::traits::OrderError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("no delivery slot available at hour {target_hour}")]
    NoDeliverySlot { target_hour: u32 },

    #[error("not active for this time slot: {target_slot}")]
    SlotNotActive {
        target_slot: String,
        active_slots: Vec<String>,
    },

    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

/// 将存储错误转换为错误码
fn storage_error(e: StorageError) -> AppError {
    match e {
        StorageError::OrderNotFound(id) => {
            AppError::new(ErrorCode::OrderNotFound).with_detail("orderId", id)
        }
        StorageError::VersionConflict {
            order_id,
            expected,
            found,
        } => {
            tracing::warn!(order_id = %order_id, expected, found, "Concurrent order update rejected");
            AppError::new(ErrorCode::OrderVersionConflict).with_detail("orderId", order_id)
        }
        StorageError::OrderExists(id) => {
            AppError::conflict(format!("Order already exists: {}", id))
        }
        // 保留技术细节用于日志，不暴露给客户端
        other => {
            tracing::error!(error = %other, "Storage error occurred");
            AppError::database("Order store unavailable")
        }
    }
}

fn order_error(e: OrderError) -> AppError {
    match e {
        OrderError::OrderNotFound(id) => {
            AppError::new(ErrorCode::OrderNotFound).with_detail("orderId", id)
        }
        OrderError::DayNotFound(id) => {
            AppError::new(ErrorCode::DayNotFound).with_detail("dayId", id)
        }
        OrderError::DayRequired => AppError::new(ErrorCode::DayRequired),
        OrderError::Cancelled(id) => AppError::new(ErrorCode::OrderCancelled).with_detail("id", id),
        OrderError::AlreadyCancelled(id) => {
            AppError::with_message(ErrorCode::OrderCancelled, "Already cancelled")
                .with_detail("id", id)
        }
        OrderError::AlreadyDelivered(id) => {
            AppError::new(ErrorCode::OrderAlreadyDelivered).with_detail("id", id)
        }
        OrderError::PaymentAlreadyCompleted => AppError::new(ErrorCode::PaymentAlreadyCompleted),
        OrderError::PaymentNotCod(status) => AppError::new(ErrorCode::PaymentNotCod)
            .with_detail("paymentStatus", serde_json::to_value(status).unwrap_or_default()),
        OrderError::PaymentNotDelivered => AppError::new(ErrorCode::PaymentNotDelivered),
        OrderError::PaymentNotFirstDay { first_day_id } => {
            AppError::new(ErrorCode::PaymentNotFirstDay).with_detail("firstDayId", first_day_id)
        }
        OrderError::NotOwner(id) => {
            AppError::forbidden("Order belongs to another customer").with_detail("orderId", id)
        }
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Storage(e) => storage_error(e),
            ManagerError::Order(e) => order_error(e),
            ManagerError::NoDeliverySlot { target_hour } => {
                AppError::new(ErrorCode::NoDeliverySlot).with_detail("targetHour", target_hour)
            }
            ManagerError::SlotNotActive {
                target_slot,
                active_slots,
            } => AppError::new(ErrorCode::SlotNotActive)
                .with_detail("targetSlot", target_slot)
                .with_detail("activeSlots", active_slots),
            ManagerError::UnknownTimeSlot(label) => {
                AppError::new(ErrorCode::UnknownTimeSlot).with_detail("timeSlot", label)
            }
            ManagerError::UserNotFound(id) => {
                AppError::new(ErrorCode::UserNotFound).with_detail("userId", id)
            }
            ManagerError::Forbidden(msg) => AppError::forbidden(msg),
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
