use super::*;
use crate::orders::storage::OrderStorage;
use chrono::{Duration, TimeZone};
use shared::models::{
    Customization, Day, FreshPlan, Fulfillment, LineItem, OrderKind, QuickSip,
};
use shared::order::PaymentStatus;

mod test_delivery;

const TZ: Tz = chrono_tz::Asia::Kolkata;

fn create_test_manager() -> OrdersManager {
    let storage = OrderStorage::open_in_memory().unwrap();
    OrdersManager::new(storage, TimeSlotTable::default(), TZ)
}

/// 2024-05-02 12:00 in the business timezone
fn now() -> DateTime<Utc> {
    TZ.with_ymd_and_hms(2024, 5, 2, 12, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

fn ctx(operator_id: &str, role: Role) -> ActionContext {
    ActionContext::new(operator_id, role, now())
}

// ========================================================================
// Document builders
// ========================================================================

fn item(product_id: &str, slot: Option<&str>, final_price: f64, quantity: u32) -> LineItem {
    LineItem {
        product_id: product_id.to_string(),
        name: format!("Product {}", product_id),
        quantity,
        customization: Some(Customization {
            label: Some("Regular".to_string()),
            final_price,
        }),
        unit_price: final_price,
        time_slot: slot.map(str::to_string),
    }
}

fn quicksip_order(id: &str, slot: &str, created_at: DateTime<Utc>) -> Order {
    Order {
        id: id.to_string(),
        user_id: "cust-1".to_string(),
        total_amount: 260.0,
        delivery_charge: 20.0,
        payment_status: PaymentStatus::Cod,
        created_at,
        cancellation: None,
        version: 0,
        kind: OrderKind::QuickSip(QuickSip {
            items: vec![item("cold-brew", None, 120.0, 2)],
            fulfillment: Fulfillment::default(),
            delivery_time_slot: slot.to_string(),
        }),
    }
}

fn plan_day(order_id: &str, id: &str, date: NaiveDate, slot: Option<&str>) -> Day {
    Day {
        id: id.to_string(),
        order_id: order_id.to_string(),
        date,
        time_slot: slot.map(str::to_string),
        items: vec![item("salad", None, 150.0, 1)],
        fulfillment: Fulfillment::default(),
        cancellation: None,
    }
}

fn freshplan_order(id: &str, complete_checkout: bool, days: Vec<Day>) -> Order {
    Order {
        id: id.to_string(),
        user_id: "cust-1".to_string(),
        total_amount: 900.0,
        delivery_charge: 0.0,
        payment_status: PaymentStatus::Cod,
        created_at: now() - Duration::days(3),
        cancellation: None,
        version: 0,
        kind: OrderKind::FreshPlan(FreshPlan {
            plan_name: Some("Green Week".to_string()),
            is_complete_plan_checkout: complete_checkout,
            day_schedule: days,
        }),
    }
}

/// Three-day plan on May 2, 3, 4 (listed out of date order)
fn three_day_plan(id: &str, complete_checkout: bool) -> Order {
    freshplan_order(
        id,
        complete_checkout,
        vec![
            plan_day(id, "day-3", date(3), Some("9-10 AM")),
            plan_day(id, "day-2", date(2), Some("9-10 AM")),
            plan_day(id, "day-4", date(4), Some("9-10 AM")),
        ],
    )
}

fn seed(manager: &OrdersManager, order: Order) -> Order {
    manager.storage().insert_order(&order).unwrap();
    order
}

fn seed_user(manager: &OrdersManager, id: &str, role: Role, slots: &[&str]) -> User {
    let user = User {
        id: id.to_string(),
        name: format!("User {}", id),
        phone: Some("+91 98765 43210".to_string()),
        email: None,
        address: Some("12 MG Road, Bengaluru".to_string()),
        role,
        delivery_active_info: (role == Role::Delivery).then(|| DeliveryActiveInfo {
            time_slots: slots.iter().map(|s| s.to_string()).collect(),
        }),
    };
    manager.storage().put_user(&user).unwrap();
    user
}

fn load(manager: &OrdersManager, id: &str) -> Order {
    manager.storage().get_order(id).unwrap().unwrap()
}

fn quicksip(order: &Order) -> &QuickSip {
    match &order.kind {
        OrderKind::QuickSip(q) => q,
        OrderKind::FreshPlan(_) => panic!("expected quicksip"),
    }
}

fn plan(order: &Order) -> &FreshPlan {
    match &order.kind {
        OrderKind::FreshPlan(p) => p,
        OrderKind::QuickSip(_) => panic!("expected freshplan"),
    }
}

// ========================================================================
// Action builders
// ========================================================================

use crate::orders::actions::{
    CancelOrderAction, ConfirmCodPaymentAction, UpdateDeliveryStatusAction,
    UpdateItemStatusAction,
};
use shared::order::{DeliveryStatus, KitchenStatus};

fn kitchen(order_id: &str, day_id: Option<&str>, status: KitchenStatus) -> UpdateItemStatusAction {
    UpdateItemStatusAction {
        order_id: order_id.to_string(),
        day_id: day_id.map(str::to_string),
        status,
        at: None,
    }
}

fn delivery(
    order_id: &str,
    day_id: Option<&str>,
    status: DeliveryStatus,
) -> UpdateDeliveryStatusAction {
    UpdateDeliveryStatusAction {
        order_id: order_id.to_string(),
        day_id: day_id.map(str::to_string),
        status,
        at: None,
    }
}

fn payment(order_id: &str, day_id: Option<&str>) -> ConfirmCodPaymentAction {
    ConfirmCodPaymentAction {
        order_id: order_id.to_string(),
        day_id: day_id.map(str::to_string),
    }
}

fn cancel(order_id: &str, day_id: Option<&str>) -> CancelOrderAction {
    CancelOrderAction {
        order_id: order_id.to_string(),
        day_id: day_id.map(str::to_string),
        reason: Some("Customer request".to_string()),
    }
}

/// Drive a unit to delivered
fn deliver(manager: &OrdersManager, order_id: &str, day_id: Option<&str>) {
    let rider = ctx("rider-1", Role::Delivery);
    manager
        .execute(delivery(order_id, day_id, DeliveryStatus::Picked), &rider)
        .unwrap();
    manager
        .execute(delivery(order_id, day_id, DeliveryStatus::Delivered), &rider)
        .unwrap();
}

fn order_err(result: ManagerResult<Order>) -> OrderError {
    match result {
        Err(ManagerError::Order(e)) => e,
        other => panic!("expected order error, got {:?}", other),
    }
}
