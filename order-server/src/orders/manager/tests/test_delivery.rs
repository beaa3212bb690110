use super::*;
use crate::orders::queue::QueueKind;
use shared::order::{ASAP, OrderStatus, OrderType};

const RIDER: &str = "rider-1";

fn created_today(hour: u32) -> DateTime<Utc> {
    TZ.with_ymd_and_hms(2024, 5, 2, hour, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

/// Orders around the 6-7 PM slot on 2024-05-02
fn seed_evening(manager: &OrdersManager) {
    seed(manager, quicksip_order("6630a1b2c3d4e5f6000000a1", "6-7 PM", created_today(10)));
    seed(manager, quicksip_order("6630a1b2c3d4e5f6000000a2", ASAP, created_today(11)));
    seed(manager, quicksip_order("6630a1b2c3d4e5f6000000a3", "5-6 PM", created_today(9)));
    // yesterday's order in the same slot
    seed(
        manager,
        quicksip_order("6630a1b2c3d4e5f6000000a4", "6-7 PM", created_today(10) - Duration::days(1)),
    );

    let fp = "6630a1b2c3d4e5f6000000b1";
    let mut slot_from_item = plan_day(fp, "fp-today", today(), None);
    slot_from_item.items = vec![
        item("salad", Some("6-7 PM"), 150.0, 2),
        item("juice", Some("6-7 PM"), 80.5, 1),
    ];
    let mut cancelled = plan_day(fp, "fp-cancelled", today(), Some("6-7 PM"));
    cancelled.fulfillment.status = OrderStatus::Cancelled;
    cancelled.cancellation = Some(shared::models::Cancellation {
        cancelled_by: "cust-1".into(),
        cancelled_at: now(),
        reason: None,
    });
    let tomorrow = plan_day(fp, "fp-tomorrow", date(3), Some("6-7 PM"));
    let mut plan = freshplan_order(fp, false, vec![slot_from_item, cancelled, tomorrow]);
    plan.created_at = created_today(8);
    seed(manager, plan);

    // ASAP means nothing on a freshplan day
    let fp_asap = "6630a1b2c3d4e5f6000000b2";
    seed(
        manager,
        Order {
            created_at: created_today(8),
            ..freshplan_order(fp_asap, false, vec![plan_day(fp_asap, "fp-asap", today(), Some(ASAP))])
        },
    );
}

// ========================================================================
// Eligibility
// ========================================================================

#[test]
fn test_eligible_orders_for_rounded_slot() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &["6-7 PM"]);
    seed_user(&manager, "cust-1", Role::Customer, &[]);
    seed_evening(&manager);

    // 17:35 rounds up to 18:00
    let rows = manager.eligible_orders(RIDER, 17, 35, now()).unwrap();

    let ids: Vec<(&str, Option<&str>)> = rows
        .iter()
        .map(|r| (r.order_id.as_str(), r.day_id.as_deref()))
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&("6630a1b2c3d4e5f6000000a1", None)));
    assert!(ids.contains(&("6630a1b2c3d4e5f6000000b1", Some("fp-today"))));

    // ASAP sorts after every configured slot
    let last = rows.last().unwrap();
    assert_eq!(last.order_id, "6630a1b2c3d4e5f6000000a2");
    assert_eq!(last.time_slot, ASAP);
    assert_eq!(last.order_type, OrderType::QuickSip);
}

#[test]
fn test_eligible_row_projection() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &["6-7 PM"]);
    seed_user(&manager, "cust-1", Role::Customer, &[]);
    seed_evening(&manager);

    let rows = manager.eligible_orders(RIDER, 18, 0, now()).unwrap();
    let day_row = rows
        .iter()
        .find(|r| r.day_id.as_deref() == Some("fp-today"))
        .unwrap();

    assert_eq!(day_row.order_number, "0000B1");
    assert_eq!(day_row.time_slot, "6-7 PM");
    assert_eq!(day_row.items.len(), 2);
    // 150 × 2 + 80.5
    assert_eq!(day_row.total, 380.5);
    assert_eq!(day_row.customer.name, "User cust-1");
    assert_eq!(day_row.customer.address.as_deref(), Some("12 MG Road, Bengaluru"));

    let quick_row = rows
        .iter()
        .find(|r| r.order_id == "6630a1b2c3d4e5f6000000a1")
        .unwrap();
    assert_eq!(quick_row.total, 260.0);
    assert_eq!(quick_row.status, OrderStatus::Pending);
}

#[test]
fn test_missing_customer_gives_empty_contact() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &["5-6 PM"]);
    seed(&manager, quicksip_order("6630a1b2c3d4e5f6000000c1", "5-6 PM", created_today(9)));

    let rows = manager.eligible_orders(RIDER, 17, 10, now()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].customer.name, "");
}

#[test]
fn test_cancelled_orders_are_not_eligible() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &["5-6 PM"]);
    seed(&manager, quicksip_order("6630a1b2c3d4e5f6000000c2", "5-6 PM", created_today(9)));
    manager
        .execute(cancel("6630a1b2c3d4e5f6000000c2", None), &ctx("admin", Role::Admin))
        .unwrap();

    let rows = manager.eligible_orders(RIDER, 17, 10, now()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_plan_created_earlier_is_not_eligible() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &["6-7 PM"]);

    // created three days ago, with a day dated today in the target slot
    let fp = "6630a1b2c3d4e5f6000000b3";
    seed(
        &manager,
        freshplan_order(fp, false, vec![plan_day(fp, "fp-old", today(), Some("6-7 PM"))]),
    );

    let rows = manager.eligible_orders(RIDER, 18, 0, now()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_no_slot_at_target_hour() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &["6-7 PM"]);

    // 12:45 → 13:00
    let err = manager.eligible_orders(RIDER, 12, 45, now()).unwrap_err();
    assert!(matches!(err, ManagerError::NoDeliverySlot { target_hour: 13 }));
}

#[test]
fn test_worker_must_be_active_for_slot() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &["7-8 AM", "8-9 AM"]);

    let err = manager.eligible_orders(RIDER, 17, 10, now()).unwrap_err();
    match err {
        ManagerError::SlotNotActive {
            target_slot,
            active_slots,
        } => {
            assert_eq!(target_slot, "5-6 PM");
            assert_eq!(active_slots, vec!["7-8 AM", "8-9 AM"]);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_unknown_worker() {
    let manager = create_test_manager();
    let err = manager.eligible_orders("ghost", 17, 10, now()).unwrap_err();
    assert!(matches!(err, ManagerError::UserNotFound(_)));
}

#[test]
fn test_asap_last_with_custom_table() {
    // Same labels, reversed priority
    let mut reversed = TimeSlotTable::default().slots().to_vec();
    reversed.reverse();
    let manager = OrdersManager::new(
        OrderStorage::open_in_memory().unwrap(),
        TimeSlotTable::new(reversed),
        TZ,
    );
    seed_user(&manager, RIDER, Role::Delivery, &["6-7 PM"]);
    seed(&manager, quicksip_order("6630a1b2c3d4e5f6000000d1", ASAP, created_today(9)));
    seed(&manager, quicksip_order("6630a1b2c3d4e5f6000000d2", "6-7 PM", created_today(9)));

    let rows = manager.eligible_orders(RIDER, 18, 5, now()).unwrap();
    assert_eq!(rows[0].time_slot, "6-7 PM");
    assert_eq!(rows[1].time_slot, ASAP);
}

// ========================================================================
// Active slots
// ========================================================================

#[test]
fn test_set_active_slots_dedupes() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &[]);

    let user = manager
        .set_active_slots(
            RIDER,
            vec!["5-6 PM".into(), "6-7 PM".into(), "5-6 PM".into()],
        )
        .unwrap();
    assert_eq!(user.active_slots(), ["5-6 PM", "6-7 PM"]);

    let stored = manager.storage().get_user(RIDER).unwrap().unwrap();
    assert_eq!(stored.active_slots(), ["5-6 PM", "6-7 PM"]);

    // now eligible at 17:10
    assert!(manager.eligible_orders(RIDER, 17, 10, now()).is_ok());
}

#[test]
fn test_set_active_slots_rejects_unknown_label() {
    let manager = create_test_manager();
    seed_user(&manager, RIDER, Role::Delivery, &["5-6 PM"]);

    let err = manager
        .set_active_slots(RIDER, vec!["1-2 PM".into()])
        .unwrap_err();
    assert!(matches!(err, ManagerError::UnknownTimeSlot(ref l) if l == "1-2 PM"));

    let stored = manager.storage().get_user(RIDER).unwrap().unwrap();
    assert_eq!(stored.active_slots(), ["5-6 PM"]);
}

#[test]
fn test_set_active_slots_only_for_riders() {
    let manager = create_test_manager();
    seed_user(&manager, "chef-1", Role::Chef, &[]);

    let err = manager
        .set_active_slots("chef-1", vec!["5-6 PM".into()])
        .unwrap_err();
    assert!(matches!(err, ManagerError::Forbidden(_)));
}

// ========================================================================
// Kitchen queues
// ========================================================================

#[test]
fn test_pending_queue_lists_every_line_item() {
    let manager = create_test_manager();
    seed_evening(&manager);

    let rows = manager
        .kitchen_queue(QueueKind::Pending, "chef-1", today())
        .unwrap();

    // a1, a2, a3 + fp-today (2 items) + fp-asap
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.status == OrderStatus::Pending));
    assert!(rows.iter().all(|r| r.order_id != "6630a1b2c3d4e5f6000000a4"));
    assert!(rows.iter().all(|r| r.day_id.as_deref() != Some("fp-tomorrow")));

    let fp_rows: Vec<_> = rows
        .iter()
        .filter(|r| r.day_id.as_deref() == Some("fp-today"))
        .collect();
    assert_eq!(fp_rows.len(), 2);
    assert!(fp_rows.iter().all(|r| r.time_slot.as_deref() == Some("6-7 PM")));
}

#[test]
fn test_queue_sorted_by_slot() {
    let manager = create_test_manager();
    seed(&manager, quicksip_order("6630a1b2c3d4e5f6000000e1", "8-9 PM", created_today(8)));
    seed(&manager, quicksip_order("6630a1b2c3d4e5f6000000e2", "7-8 AM", created_today(6)));
    seed(&manager, quicksip_order("6630a1b2c3d4e5f6000000e3", ASAP, created_today(7)));
    seed(&manager, quicksip_order("6630a1b2c3d4e5f6000000e4", "11-12 PM", created_today(9)));

    let rows = manager
        .kitchen_queue(QueueKind::Pending, "chef-1", today())
        .unwrap();
    let slots: Vec<_> = rows.iter().map(|r| r.time_slot.as_deref().unwrap()).collect();
    assert_eq!(slots, vec!["7-8 AM", "11-12 PM", "8-9 PM", ASAP]);
}

#[test]
fn test_received_queue_is_per_chef() {
    let manager = create_test_manager();
    let mine = "6630a1b2c3d4e5f6000000f1";
    let theirs = "6630a1b2c3d4e5f6000000f2";
    seed(&manager, quicksip_order(mine, "5-6 PM", created_today(9)));
    seed(&manager, quicksip_order(theirs, "5-6 PM", created_today(9)));

    manager
        .execute(kitchen(mine, None, KitchenStatus::Received), &ctx("chef-1", Role::Chef))
        .unwrap();
    manager
        .execute(kitchen(theirs, None, KitchenStatus::Received), &ctx("chef-2", Role::Chef))
        .unwrap();

    let rows = manager
        .kitchen_queue(QueueKind::Received, "chef-1", today())
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].order_id, mine);
    assert_eq!(rows[0].status, OrderStatus::Received);

    let pending = manager
        .kitchen_queue(QueueKind::Pending, "chef-1", today())
        .unwrap();
    assert!(pending.is_empty());

    manager
        .execute(kitchen(mine, None, KitchenStatus::Done), &ctx("chef-1", Role::Chef))
        .unwrap();
    let done = manager
        .kitchen_queue(QueueKind::Done, "chef-1", today())
        .unwrap();
    assert_eq!(done.len(), 1);
    assert!(manager
        .kitchen_queue(QueueKind::Done, "chef-2", today())
        .unwrap()
        .is_empty());
}
