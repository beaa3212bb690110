//! Cash-on-delivery capture
//!
//! Check order:
//! 1. already completed
//! 2. not cash on delivery
//! 3. freshplan: day required and present; payment is collected once, on the
//!    earliest day by date (checked before the day's status); that day must
//!    be delivered
//! 4. quicksip: the order must be delivered

use shared::models::{Order, OrderKind};
use shared::order::{OrderStatus, PaymentStatus};

use crate::orders::traits::{ActionContext, OrderAction, OrderError};

#[derive(Debug, Clone)]
pub struct ConfirmCodPaymentAction {
    pub order_id: String,
    pub day_id: Option<String>,
}

impl OrderAction for ConfirmCodPaymentAction {
    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn name(&self) -> &'static str {
        "confirm_cod_payment"
    }

    fn apply(&self, order: &mut Order, _ctx: &ActionContext) -> Result<(), OrderError> {
        match order.payment_status {
            PaymentStatus::Completed => return Err(OrderError::PaymentAlreadyCompleted),
            PaymentStatus::Cod => {}
            other => return Err(OrderError::PaymentNotCod(other)),
        }

        match &order.kind {
            OrderKind::FreshPlan(plan) => {
                let day_id = self.day_id.as_deref().ok_or(OrderError::DayRequired)?;
                let day = plan
                    .day(day_id)
                    .ok_or_else(|| OrderError::DayNotFound(day_id.to_string()))?;

                if let Some(first) = plan.first_day()
                    && first.id != day.id
                {
                    return Err(OrderError::PaymentNotFirstDay {
                        first_day_id: first.id.clone(),
                    });
                }

                if day.fulfillment.status != OrderStatus::Delivered {
                    return Err(OrderError::PaymentNotDelivered);
                }
            }
            OrderKind::QuickSip(q) => {
                if q.fulfillment.status != OrderStatus::Delivered {
                    return Err(OrderError::PaymentNotDelivered);
                }
            }
        }

        order.payment_status = PaymentStatus::Completed;
        Ok(())
    }
}
