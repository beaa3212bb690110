//! Action trait and the errors actions raise

use chrono::{DateTime, Utc};
use shared::models::{Fulfillment, Order, OrderKind, Role};
use shared::order::PaymentStatus;
use thiserror::Error;

/// Errors raised while applying an action to an order document
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Day not found: {0}")]
    DayNotFound(String),

    #[error("dayId is required for freshplan orders")]
    DayRequired,

    #[error("Order or day is cancelled: {0}")]
    Cancelled(String),

    #[error("Already cancelled: {0}")]
    AlreadyCancelled(String),

    #[error("Already delivered: {0}")]
    AlreadyDelivered(String),

    #[error("paymentStatus already completed")]
    PaymentAlreadyCompleted,

    #[error("Payment is not cash on delivery: {0:?}")]
    PaymentNotCod(PaymentStatus),

    #[error("Payment requires a delivered order or day")]
    PaymentNotDelivered,

    #[error("payment can only be collected on the first delivery day")]
    PaymentNotFirstDay { first_day_id: String },

    #[error("Not the owner of order {0}")]
    NotOwner(String),
}

/// Who is acting and when
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub operator_id: String,
    pub role: Role,
    /// Server time of the request
    pub now: DateTime<Utc>,
}

impl ActionContext {
    pub fn new(operator_id: impl Into<String>, role: Role, now: DateTime<Utc>) -> Self {
        Self {
            operator_id: operator_id.into(),
            role,
            now,
        }
    }
}

/// A mutation of one order document.
///
/// Actions only touch the in-memory document; the manager loads it,
/// applies the action and saves it under the version check.
pub trait OrderAction {
    /// Document the action targets
    fn order_id(&self) -> &str;

    /// Action name for logs
    fn name(&self) -> &'static str;

    fn apply(&self, order: &mut Order, ctx: &ActionContext) -> Result<(), OrderError>;
}

/// Resolve the fulfillment unit a kitchen/delivery transition targets:
/// the order itself (quicksip) or one day (freshplan).
///
/// Explicitly cancelled orders and days are rejected.
pub(crate) fn fulfillment_mut<'a>(
    order: &'a mut Order,
    day_id: Option<&str>,
) -> Result<&'a mut Fulfillment, OrderError> {
    if order.cancellation.is_some() {
        return Err(OrderError::Cancelled(order.id.clone()));
    }
    match &mut order.kind {
        OrderKind::QuickSip(q) => Ok(&mut q.fulfillment),
        OrderKind::FreshPlan(plan) => {
            let day_id = day_id.ok_or(OrderError::DayRequired)?;
            let day = plan
                .day_mut(day_id)
                .ok_or_else(|| OrderError::DayNotFound(day_id.to_string()))?;
            if day.is_cancelled() {
                return Err(OrderError::Cancelled(day.id.clone()));
            }
            Ok(&mut day.fulfillment)
        }
    }
}
