//! Delivery time-slot eligibility
//!
//! A worker's wall clock picks the target slot (round up from half past),
//! then orders created today are matched against it:
//! - quicksip: slot equals the target or is `ASAP`
//! - freshplan: day dated today, day slot (else first item slot) equals the target
//!
//! Explicitly cancelled orders and days never match.

use chrono::NaiveDate;
use chrono_tz::Tz;
use shared::models::{CustomerContact, Order, OrderKind, TimeSlot, TimeSlotTable};
use shared::order::{ASAP, DeliveryOrderRow, OrderType};

use super::money;

/// 分钟 ≥ 30 时取下一个整点
pub fn target_hour(hour: u32, minutes: u32) -> u32 {
    if minutes >= 30 {
        hour.saturating_add(1)
    } else {
        hour
    }
}

/// Slot starting at the target hour for the given wall clock
pub fn target_slot(slots: &TimeSlotTable, hour: u32, minutes: u32) -> Option<&TimeSlot> {
    slots.starting_at(target_hour(hour, minutes))
}

/// QuickSip slot match; `ASAP` matches every target
pub fn quicksip_matches(slot: &str, target: &str) -> bool {
    slot == target || slot == ASAP
}

/// Project every order/day matching `target` on `today` into delivery rows,
/// sorted by slot priority.
pub fn eligible_rows<F>(
    orders: &[Order],
    target: &str,
    today: NaiveDate,
    tz: Tz,
    slots: &TimeSlotTable,
    mut contact: F,
) -> Vec<DeliveryOrderRow>
where
    F: FnMut(&str) -> CustomerContact,
{
    let mut rows = Vec::new();

    let created_today = |o: &Order| o.created_at.with_timezone(&tz).date_naive() == today;

    for order in orders
        .iter()
        .filter(|o| !o.is_cancelled() && created_today(o))
    {
        match &order.kind {
            OrderKind::QuickSip(q) => {
                if !quicksip_matches(&q.delivery_time_slot, target) {
                    continue;
                }
                rows.push(DeliveryOrderRow {
                    order_number: order.order_number(),
                    order_id: order.id.clone(),
                    day_id: None,
                    order_type: OrderType::QuickSip,
                    customer: contact(&order.user_id),
                    items: q.items.clone(),
                    total: order.total_amount,
                    status: q.fulfillment.status,
                    payment_status: order.payment_status,
                    time_slot: q.delivery_time_slot.clone(),
                });
            }
            OrderKind::FreshPlan(plan) => {
                for day in &plan.day_schedule {
                    if day.is_cancelled() || day.date != today {
                        continue;
                    }
                    let Some(slot) = day.resolved_slot().filter(|s| *s == target) else {
                        continue;
                    };
                    rows.push(DeliveryOrderRow {
                        order_number: order.order_number(),
                        order_id: order.id.clone(),
                        day_id: Some(day.id.clone()),
                        order_type: OrderType::FreshPlan,
                        customer: contact(&order.user_id),
                        items: day.items.clone(),
                        total: money::day_total(&day.items),
                        status: day.fulfillment.status,
                        payment_status: order.payment_status,
                        time_slot: slot.to_string(),
                    });
                }
            }
        }
    }

    rows.sort_by_key(|row| slots.rank(Some(&row.time_slot)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_hour_rounding() {
        assert_eq!(target_hour(17, 35), 18);
        assert_eq!(target_hour(17, 10), 17);
        assert_eq!(target_hour(17, 30), 18);
        assert_eq!(target_hour(17, 29), 17);
    }

    #[test]
    fn test_target_hour_does_not_overflow() {
        assert_eq!(target_hour(u32::MAX, 45), u32::MAX);
        assert!(target_slot(&TimeSlotTable::default(), u32::MAX, 45).is_none());
    }

    #[test]
    fn test_target_slot_lookup() {
        let slots = TimeSlotTable::default();
        assert_eq!(
            target_slot(&slots, 17, 35).map(|s| s.start_hour),
            Some(18)
        );
        assert_eq!(
            target_slot(&slots, 17, 10).map(|s| s.start_hour),
            Some(17)
        );
        // 12:45 → 13:00, no slot starts then
        assert!(target_slot(&slots, 12, 45).is_none());
        assert!(target_slot(&slots, 23, 50).is_none());
    }

    #[test]
    fn test_asap_matches_every_quicksip_slot() {
        for slot in TimeSlotTable::default().slots() {
            assert!(quicksip_matches(ASAP, &slot.range));
        }
        assert!(quicksip_matches("5-6 PM", "5-6 PM"));
        assert!(!quicksip_matches("4-5 PM", "5-6 PM"));
    }
}
