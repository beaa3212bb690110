//! Kitchen transitions: received / done
//!
//! `received` replaces the kitchen stamp with the acting chef; `done` keeps
//! the existing chef and received time and only adds the done time.

use chrono::{DateTime, Utc};
use shared::models::{Fulfillment, Order, StatusInfo};
use shared::order::KitchenStatus;

use crate::orders::traits::{ActionContext, OrderAction, OrderError, fulfillment_mut};

#[derive(Debug, Clone)]
pub struct UpdateItemStatusAction {
    pub order_id: String,
    pub day_id: Option<String>,
    pub status: KitchenStatus,
    /// Client-supplied stamp, server time when absent
    pub at: Option<DateTime<Utc>>,
}

impl OrderAction for UpdateItemStatusAction {
    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn name(&self) -> &'static str {
        "update_item_status"
    }

    fn apply(&self, order: &mut Order, ctx: &ActionContext) -> Result<(), OrderError> {
        let fulfillment = fulfillment_mut(order, self.day_id.as_deref())?;
        let at = self.at.unwrap_or(ctx.now);
        stamp_kitchen(fulfillment, self.status, &ctx.operator_id, at);
        Ok(())
    }
}

fn stamp_kitchen(f: &mut Fulfillment, status: KitchenStatus, chef_id: &str, at: DateTime<Utc>) {
    match status {
        KitchenStatus::Received => {
            f.status_info = Some(StatusInfo {
                chef_id: chef_id.to_string(),
                received_time: Some(at),
                done_time: None,
            });
        }
        KitchenStatus::Done => match &mut f.status_info {
            Some(info) => info.done_time = Some(at),
            None => {
                f.status_info = Some(StatusInfo {
                    chef_id: chef_id.to_string(),
                    received_time: None,
                    done_time: Some(at),
                });
            }
        },
    }
    f.status = status.stored_status();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::order::OrderStatus;

    fn t(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, h, 0, 0).unwrap()
    }

    #[test]
    fn test_received_replaces_stamp() {
        let mut f = Fulfillment {
            status: OrderStatus::Done,
            status_info: Some(StatusInfo {
                chef_id: "old-chef".into(),
                received_time: Some(t(1)),
                done_time: Some(t(2)),
            }),
            delivery_info: None,
        };
        stamp_kitchen(&mut f, KitchenStatus::Received, "chef-2", t(3));

        assert_eq!(f.status, OrderStatus::Received);
        let info = f.status_info.unwrap();
        assert_eq!(info.chef_id, "chef-2");
        assert_eq!(info.received_time, Some(t(3)));
        assert_eq!(info.done_time, None);
    }

    #[test]
    fn test_done_merges_into_stamp() {
        let mut f = Fulfillment::default();
        stamp_kitchen(&mut f, KitchenStatus::Received, "chef-1", t(4));
        stamp_kitchen(&mut f, KitchenStatus::Done, "chef-9", t(5));

        assert_eq!(f.status, OrderStatus::Done);
        let info = f.status_info.unwrap();
        assert_eq!(info.chef_id, "chef-1");
        assert_eq!(info.received_time, Some(t(4)));
        assert_eq!(info.done_time, Some(t(5)));
    }

    #[test]
    fn test_done_without_received_stamps_caller() {
        let mut f = Fulfillment::default();
        stamp_kitchen(&mut f, KitchenStatus::Done, "chef-3", t(6));

        let info = f.status_info.unwrap();
        assert_eq!(info.chef_id, "chef-3");
        assert_eq!(info.received_time, None);
        assert_eq!(info.done_time, Some(t(6)));
    }
}
