//! Delivery transitions: picked / delivered / not-delivered

use chrono::{DateTime, Utc};
use shared::models::{DeliveryInfo, Fulfillment, Order};
use shared::order::{DeliveryStatus, NOT_DELIVERED_REASON};

use crate::orders::traits::{ActionContext, OrderAction, OrderError, fulfillment_mut};

#[derive(Debug, Clone)]
pub struct UpdateDeliveryStatusAction {
    pub order_id: String,
    pub day_id: Option<String>,
    pub status: DeliveryStatus,
    pub at: Option<DateTime<Utc>>,
}

impl OrderAction for UpdateDeliveryStatusAction {
    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn name(&self) -> &'static str {
        "update_delivery_status"
    }

    fn apply(&self, order: &mut Order, ctx: &ActionContext) -> Result<(), OrderError> {
        let fulfillment = fulfillment_mut(order, self.day_id.as_deref())?;
        let at = self.at.unwrap_or(ctx.now);
        stamp_delivery(fulfillment, self.status, &ctx.operator_id, at);
        Ok(())
    }
}

fn stamp_delivery(f: &mut Fulfillment, status: DeliveryStatus, person_id: &str, at: DateTime<Utc>) {
    let blank = || DeliveryInfo {
        delivery_person_id: person_id.to_string(),
        picked_time: None,
        delivered_time: None,
        not_delivered_time: None,
        not_delivered_reason: None,
    };

    match status {
        DeliveryStatus::Picked => {
            f.delivery_info = Some(DeliveryInfo {
                picked_time: Some(at),
                ..blank()
            });
        }
        DeliveryStatus::Delivered => {
            let info = f.delivery_info.get_or_insert_with(blank);
            info.delivery_person_id = person_id.to_string();
            info.delivered_time = Some(at);
        }
        DeliveryStatus::NotDelivered => {
            let info = f.delivery_info.get_or_insert_with(blank);
            info.delivery_person_id = person_id.to_string();
            info.not_delivered_time = Some(at);
            info.not_delivered_reason = Some(NOT_DELIVERED_REASON.to_string());
        }
    }
    f.status = status.stored_status();
}
