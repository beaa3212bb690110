//! Lifecycle action implementations
//!
//! Each action implements [`OrderAction`] for one transition; the
//! [`LifecycleAction`] enum dispatches to them.

use crate::orders::traits::{ActionContext, OrderAction, OrderError};
use shared::models::Order;

mod cancel_order;
mod confirm_cod_payment;
mod update_delivery_status;
mod update_item_status;

pub use cancel_order::CancelOrderAction;
pub use confirm_cod_payment::ConfirmCodPaymentAction;
pub use update_delivery_status::UpdateDeliveryStatusAction;
pub use update_item_status::UpdateItemStatusAction;

/// LifecycleAction enum - dispatches to concrete action implementations
#[derive(Debug, Clone)]
pub enum LifecycleAction {
    UpdateItemStatus(UpdateItemStatusAction),
    UpdateDeliveryStatus(UpdateDeliveryStatusAction),
    ConfirmCodPayment(ConfirmCodPaymentAction),
    CancelOrder(CancelOrderAction),
}

impl OrderAction for LifecycleAction {
    fn order_id(&self) -> &str {
        match self {
            LifecycleAction::UpdateItemStatus(a) => a.order_id(),
            LifecycleAction::UpdateDeliveryStatus(a) => a.order_id(),
            LifecycleAction::ConfirmCodPayment(a) => a.order_id(),
            LifecycleAction::CancelOrder(a) => a.order_id(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            LifecycleAction::UpdateItemStatus(a) => a.name(),
            LifecycleAction::UpdateDeliveryStatus(a) => a.name(),
            LifecycleAction::ConfirmCodPayment(a) => a.name(),
            LifecycleAction::CancelOrder(a) => a.name(),
        }
    }

    fn apply(&self, order: &mut Order, ctx: &ActionContext) -> Result<(), OrderError> {
        match self {
            LifecycleAction::UpdateItemStatus(a) => a.apply(order, ctx),
            LifecycleAction::UpdateDeliveryStatus(a) => a.apply(order, ctx),
            LifecycleAction::ConfirmCodPayment(a) => a.apply(order, ctx),
            LifecycleAction::CancelOrder(a) => a.apply(order, ctx),
        }
    }
}

impl From<UpdateItemStatusAction> for LifecycleAction {
    fn from(action: UpdateItemStatusAction) -> Self {
        LifecycleAction::UpdateItemStatus(action)
    }
}

impl From<UpdateDeliveryStatusAction> for LifecycleAction {
    fn from(action: UpdateDeliveryStatusAction) -> Self {
        LifecycleAction::UpdateDeliveryStatus(action)
    }
}

impl From<ConfirmCodPaymentAction> for LifecycleAction {
    fn from(action: ConfirmCodPaymentAction) -> Self {
        LifecycleAction::ConfirmCodPayment(action)
    }
}

impl From<CancelOrderAction> for LifecycleAction {
    fn from(action: CancelOrderAction) -> Self {
        LifecycleAction::CancelOrder(action)
    }
}
