//! Order-level and day-level cancellation
//!
//! With a day id on a freshplan only that day is cancelled and carries its
//! own cancellation record. Without one the order gets the record; a
//! quicksip goes to `cancelled`, a freshplan cancels every day that was not
//! delivered yet.

use shared::models::{Cancellation, Day, Order, OrderKind, Outcome, Role};
use shared::order::OrderStatus;

use crate::orders::traits::{ActionContext, OrderAction, OrderError};

#[derive(Debug, Clone)]
pub struct CancelOrderAction {
    pub order_id: String,
    pub day_id: Option<String>,
    pub reason: Option<String>,
}

impl OrderAction for CancelOrderAction {
    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn name(&self) -> &'static str {
        "cancel_order"
    }

    fn apply(&self, order: &mut Order, ctx: &ActionContext) -> Result<(), OrderError> {
        // 顾客只能取消自己的订单
        if ctx.role == Role::Customer && order.user_id != ctx.operator_id {
            return Err(OrderError::NotOwner(order.id.clone()));
        }
        if order.is_cancelled() {
            return Err(OrderError::AlreadyCancelled(order.id.clone()));
        }

        let record = Cancellation {
            cancelled_by: ctx.operator_id.clone(),
            cancelled_at: ctx.now,
            reason: self.reason.clone(),
        };

        match (&mut order.kind, self.day_id.as_deref()) {
            (OrderKind::FreshPlan(plan), Some(day_id)) => {
                let day = plan
                    .day_mut(day_id)
                    .ok_or_else(|| OrderError::DayNotFound(day_id.to_string()))?;
                if day.is_cancelled() {
                    return Err(OrderError::AlreadyCancelled(day.id.clone()));
                }
                if day.fulfillment.outcome() == Outcome::Delivered {
                    return Err(OrderError::AlreadyDelivered(day.id.clone()));
                }
                day.cancellation = Some(record);
                day.fulfillment.status = OrderStatus::Cancelled;
            }
            (OrderKind::FreshPlan(plan), None) => {
                if !plan.day_schedule.is_empty() && !plan.day_schedule.iter().any(is_open) {
                    let any_delivered = plan
                        .day_schedule
                        .iter()
                        .any(|d| d.fulfillment.outcome() == Outcome::Delivered);
                    return Err(if any_delivered {
                        OrderError::AlreadyDelivered(order.id.clone())
                    } else {
                        OrderError::AlreadyCancelled(order.id.clone())
                    });
                }
                for day in plan.day_schedule.iter_mut() {
                    if is_open(day) {
                        day.fulfillment.status = OrderStatus::Cancelled;
                    }
                }
                order.cancellation = Some(record);
            }
            (OrderKind::QuickSip(q), _) => {
                match q.fulfillment.outcome() {
                    Outcome::Delivered => return Err(OrderError::AlreadyDelivered(order.id.clone())),
                    Outcome::NotDelivered | Outcome::Cancelled => {
                        return Err(OrderError::AlreadyCancelled(order.id.clone()));
                    }
                    Outcome::Open(_) => {}
                }
                q.fulfillment.status = OrderStatus::Cancelled;
                order.cancellation = Some(record);
            }
        }
        Ok(())
    }
}

fn is_open(day: &Day) -> bool {
    matches!(day.fulfillment.outcome(), Outcome::Open(_))
}
