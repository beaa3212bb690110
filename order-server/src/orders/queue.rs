//! Kitchen queues
//!
//! One row per product line for a calendar day. QuickSip orders belong to
//! the day they were created on, freshplan days to their own date.
//! `received`/`done` only show the asking chef's work; `pending` shows
//! everything so any chef can pick it up.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Deserialize;
use shared::models::{Fulfillment, LineItem, Order, OrderKind, TimeSlotTable};
use shared::order::{KitchenQueueRow, OrderStatus, OrderType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueKind {
    Pending,
    Received,
    Done,
}

impl QueueKind {
    fn status(&self) -> OrderStatus {
        match self {
            QueueKind::Pending => OrderStatus::Pending,
            QueueKind::Received => OrderStatus::Received,
            QueueKind::Done => OrderStatus::Done,
        }
    }

    fn accepts(&self, f: &Fulfillment, chef_id: &str) -> bool {
        if f.status != self.status() {
            return false;
        }
        match self {
            QueueKind::Pending => true,
            QueueKind::Received | QueueKind::Done => f.chef_id() == Some(chef_id),
        }
    }
}

#[derive(Clone, Copy)]
struct Unit<'a> {
    order: &'a Order,
    day_id: Option<&'a str>,
    items: &'a [LineItem],
    fallback_slot: Option<&'a str>,
    status: OrderStatus,
}

pub fn kitchen_queue(
    orders: &[Order],
    kind: QueueKind,
    chef_id: &str,
    date: NaiveDate,
    tz: Tz,
    slots: &TimeSlotTable,
) -> Vec<KitchenQueueRow> {
    let mut units = Vec::new();

    for order in orders {
        match &order.kind {
            OrderKind::QuickSip(q) => {
                if order.created_at.with_timezone(&tz).date_naive() == date
                    && kind.accepts(&q.fulfillment, chef_id)
                {
                    units.push(Unit {
                        order,
                        day_id: None,
                        items: &q.items,
                        fallback_slot: Some(q.delivery_time_slot.as_str()),
                        status: q.fulfillment.status,
                    });
                }
            }
            OrderKind::FreshPlan(plan) => {
                for day in &plan.day_schedule {
                    if day.date == date && kind.accepts(&day.fulfillment, chef_id) {
                        units.push(Unit {
                            order,
                            day_id: Some(day.id.as_str()),
                            items: &day.items,
                            fallback_slot: day.time_slot.as_deref(),
                            status: day.fulfillment.status,
                        });
                    }
                }
            }
        }
    }

    let mut rows: Vec<KitchenQueueRow> = units
        .into_iter()
        .flat_map(|unit| {
            let items = unit.items;
            items.iter().map(move |item| KitchenQueueRow {
                order_number: unit.order.order_number(),
                order_id: unit.order.id.clone(),
                day_id: unit.day_id.map(str::to_string),
                order_type: unit.order.order_type(),
                product_id: item.product_id.clone(),
                product_name: item.name.clone(),
                quantity: item.quantity,
                customization: item.customization.clone(),
                time_slot: item
                    .time_slot
                    .as_deref()
                    .or(unit.fallback_slot)
                    .map(str::to_string),
                status: unit.status,
            })
        })
        .collect();

    rows.sort_by_key(|row| slots.rank(row.time_slot.as_deref()));
    rows
}

/// Row count per order type, for logging
pub fn summarize(rows: &[KitchenQueueRow]) -> (usize, usize) {
    let quicksip = rows
        .iter()
        .filter(|r| r.order_type == OrderType::QuickSip)
        .count();
    (quicksip, rows.len() - quicksip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::{Day, FreshPlan, QuickSip, StatusInfo};
    use shared::order::PaymentStatus;

    const TZ: Tz = chrono_tz::Asia::Kolkata;

    fn line(product_id: &str, slot: Option<&str>) -> LineItem {
        LineItem {
            product_id: product_id.to_string(),
            name: product_id.to_string(),
            quantity: 1,
            customization: None,
            unit_price: 100.0,
            time_slot: slot.map(str::to_string),
        }
    }

    fn base(id: &str, kind: OrderKind) -> Order {
        Order {
            id: id.to_string(),
            user_id: "cust-1".to_string(),
            total_amount: 100.0,
            delivery_charge: 0.0,
            payment_status: PaymentStatus::Cod,
            // 2024-05-01 20:00 UTC is already May 2 in Kolkata
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap(),
            cancellation: None,
            version: 0,
            kind,
        }
    }

    fn quicksip(id: &str, slot: &str, items: Vec<LineItem>) -> Order {
        base(
            id,
            OrderKind::QuickSip(QuickSip {
                items,
                fulfillment: Fulfillment::default(),
                delivery_time_slot: slot.to_string(),
            }),
        )
    }

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn test_quicksip_belongs_to_creation_day_in_business_tz() {
        let orders = vec![quicksip("aaaaaa000001", "5-6 PM", vec![line("latte", None)])];
        let slots = TimeSlotTable::default();

        let rows = kitchen_queue(&orders, QueueKind::Pending, "chef-1", may(2), TZ, &slots);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].time_slot.as_deref(), Some("5-6 PM"));
        assert_eq!(rows[0].day_id, None);

        assert!(kitchen_queue(&orders, QueueKind::Pending, "chef-1", may(1), TZ, &slots).is_empty());
    }

    #[test]
    fn test_item_slot_overrides_day_slot() {
        let order_id = "bbbbbb000002";
        let day = Day {
            id: "day-1".to_string(),
            order_id: order_id.to_string(),
            date: may(2),
            time_slot: Some("6-7 PM".to_string()),
            items: vec![line("salad", Some("7-8 AM")), line("juice", None)],
            fulfillment: Fulfillment::default(),
            cancellation: None,
        };
        let orders = vec![base(
            order_id,
            OrderKind::FreshPlan(FreshPlan {
                plan_name: None,
                is_complete_plan_checkout: false,
                day_schedule: vec![day],
            }),
        )];

        let rows = kitchen_queue(
            &orders,
            QueueKind::Pending,
            "chef-1",
            may(2),
            TZ,
            &TimeSlotTable::default(),
        );
        let products: Vec<_> = rows.iter().map(|r| r.product_id.as_str()).collect();
        assert_eq!(products, vec!["salad", "juice"]);
        assert_eq!(rows[0].time_slot.as_deref(), Some("7-8 AM"));
        assert_eq!(rows[1].time_slot.as_deref(), Some("6-7 PM"));
        assert_eq!(rows[1].day_id.as_deref(), Some("day-1"));
    }

    #[test]
    fn test_unknown_slot_sorts_last() {
        let orders = vec![
            quicksip("cccccc000001", "midnight", vec![line("a", None)]),
            quicksip("cccccc000002", "8-9 PM", vec![line("b", None)]),
            quicksip("cccccc000003", "7-8 AM", vec![line("c", None)]),
        ];
        let rows = kitchen_queue(
            &orders,
            QueueKind::Pending,
            "chef-1",
            may(2),
            TZ,
            &TimeSlotTable::default(),
        );
        let products: Vec<_> = rows.iter().map(|r| r.product_id.as_str()).collect();
        assert_eq!(products, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_received_filtered_by_chef() {
        let mut order = quicksip("dddddd000001", "5-6 PM", vec![line("latte", None)]);
        if let OrderKind::QuickSip(q) = &mut order.kind {
            q.fulfillment.status = OrderStatus::Received;
            q.fulfillment.status_info = Some(StatusInfo {
                chef_id: "chef-1".to_string(),
                received_time: None,
                done_time: None,
            });
        }
        let orders = vec![order];
        let slots = TimeSlotTable::default();

        assert_eq!(
            kitchen_queue(&orders, QueueKind::Received, "chef-1", may(2), TZ, &slots).len(),
            1
        );
        assert!(kitchen_queue(&orders, QueueKind::Received, "chef-2", may(2), TZ, &slots).is_empty());
        assert!(kitchen_queue(&orders, QueueKind::Pending, "chef-1", may(2), TZ, &slots).is_empty());
    }

    #[test]
    fn test_summarize_by_type() {
        let orders = vec![quicksip("eeeeee000001", "5-6 PM", vec![line("a", None), line("b", None)])];
        let rows = kitchen_queue(
            &orders,
            QueueKind::Pending,
            "chef-1",
            may(2),
            TZ,
            &TimeSlotTable::default(),
        );
        assert_eq!(summarize(&rows), (2, 0));
    }
}
