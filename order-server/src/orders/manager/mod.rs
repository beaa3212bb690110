//! OrdersManager - lifecycle command processing and order queries
//!
//! # Command Flow
//!
//! ```text
//! execute(action, ctx)
//!     ├─ 1. Load order document
//!     ├─ 2. Apply action in memory (validation + stamps)
//!     ├─ 3. Save whole document (version check inside the write txn)
//!     └─ 4. Return the saved document
//! ```
//!
//! Nothing is written when step 2 fails, and a concurrent save between
//! steps 1 and 3 surfaces as a version conflict instead of a lost update.

mod error;
pub use error::*;

use super::actions::LifecycleAction;
use super::eligibility;
use super::queue::{self, QueueKind};
use super::storage::OrderStorage;
use super::traits::{ActionContext, OrderAction, OrderError};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use shared::models::{CustomerContact, DeliveryActiveInfo, Order, Role, TimeSlotTable, User};
use shared::order::{DeliveryOrderRow, KitchenQueueRow};
use std::collections::HashMap;
use std::sync::Arc;

/// OrdersManager for lifecycle commands and listings
#[derive(Clone)]
pub struct OrdersManager {
    storage: OrderStorage,
    slots: Arc<TimeSlotTable>,
    /// 业务时区
    tz: Tz,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("storage", &"<OrderStorage>")
            .field("slots", &self.slots.slots().len())
            .field("tz", &self.tz)
            .finish()
    }
}

impl OrdersManager {
    pub fn new(storage: OrderStorage, slots: TimeSlotTable, tz: Tz) -> Self {
        Self {
            storage,
            slots: Arc::new(slots),
            tz,
        }
    }

    pub fn storage(&self) -> &OrderStorage {
        &self.storage
    }

    pub fn time_slots(&self) -> &TimeSlotTable {
        &self.slots
    }

    /// Calendar date of `now` in the business timezone
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.tz).date_naive()
    }

    /// Load, apply, save
    pub fn execute(
        &self,
        action: impl Into<LifecycleAction>,
        ctx: &ActionContext,
    ) -> ManagerResult<Order> {
        let action = action.into();
        let order_id = action.order_id();

        let mut order = self
            .storage
            .get_order(order_id)?
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;

        if let Err(e) = action.apply(&mut order, ctx) {
            tracing::debug!(
                order_id = %order_id,
                action = action.name(),
                operator_id = %ctx.operator_id,
                error = %e,
                "Action rejected"
            );
            return Err(e.into());
        }

        let saved = self.storage.save_order(&order)?;
        tracing::info!(
            order_id = %saved.id,
            action = action.name(),
            operator_id = %ctx.operator_id,
            version = saved.version,
            "Order updated"
        );
        Ok(saved)
    }

    /// Single order; customers only see their own
    pub fn get_order(&self, order_id: &str, viewer_id: &str, role: Role) -> ManagerResult<Order> {
        let order = self
            .storage
            .get_order(order_id)?
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;

        if role == Role::Customer && order.user_id != viewer_id {
            return Err(OrderError::NotOwner(order.id).into());
        }
        Ok(order)
    }

    /// Orders a delivery worker may take at the given wall-clock time
    pub fn eligible_orders(
        &self,
        worker_id: &str,
        hour: u32,
        minutes: u32,
        now: DateTime<Utc>,
    ) -> ManagerResult<Vec<DeliveryOrderRow>> {
        let target = eligibility::target_slot(&self.slots, hour, minutes).ok_or(
            ManagerError::NoDeliverySlot {
                target_hour: eligibility::target_hour(hour, minutes),
            },
        )?;

        let worker = self
            .storage
            .get_user(worker_id)?
            .ok_or_else(|| ManagerError::UserNotFound(worker_id.to_string()))?;

        if !worker.active_slots().iter().any(|s| *s == target.range) {
            return Err(ManagerError::SlotNotActive {
                target_slot: target.range.clone(),
                active_slots: worker.active_slots().to_vec(),
            });
        }

        let orders = self.storage.list_orders()?;
        let mut contacts: HashMap<String, CustomerContact> = HashMap::new();
        let mut lookup_error = None;

        let rows = eligibility::eligible_rows(
            &orders,
            &target.range,
            self.today(now),
            self.tz,
            &self.slots,
            |user_id| {
                if let Some(contact) = contacts.get(user_id) {
                    return contact.clone();
                }
                let contact = match self.storage.get_user(user_id) {
                    Ok(Some(user)) => CustomerContact::from(&user),
                    Ok(None) => CustomerContact::default(),
                    Err(e) => {
                        lookup_error.get_or_insert(e);
                        CustomerContact::default()
                    }
                };
                contacts.insert(user_id.to_string(), contact.clone());
                contact
            },
        );

        if let Some(e) = lookup_error {
            return Err(e.into());
        }

        tracing::debug!(
            worker_id = %worker_id,
            target_slot = %target.range,
            matched = rows.len(),
            "Eligible orders listed"
        );
        Ok(rows)
    }

    /// Kitchen queue for a calendar day
    pub fn kitchen_queue(
        &self,
        kind: QueueKind,
        chef_id: &str,
        date: NaiveDate,
    ) -> ManagerResult<Vec<KitchenQueueRow>> {
        let orders = self.storage.list_orders()?;
        let rows = queue::kitchen_queue(&orders, kind, chef_id, date, self.tz, &self.slots);

        let (quicksip, freshplan) = queue::summarize(&rows);
        tracing::debug!(
            queue = ?kind,
            chef_id = %chef_id,
            date = %date,
            quicksip,
            freshplan,
            "Kitchen queue listed"
        );
        Ok(rows)
    }

    /// Replace a delivery worker's active slot set
    pub fn set_active_slots(&self, user_id: &str, labels: Vec<String>) -> ManagerResult<User> {
        if let Some(unknown) = labels.iter().find(|l| !self.slots.contains(l)) {
            return Err(ManagerError::UnknownTimeSlot(unknown.clone()));
        }

        let mut user = self
            .storage
            .get_user(user_id)?
            .ok_or_else(|| ManagerError::UserNotFound(user_id.to_string()))?;

        if user.role != Role::Delivery {
            return Err(ManagerError::Forbidden(
                "Only delivery workers have active slots".to_string(),
            ));
        }

        let mut time_slots: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            if !time_slots.contains(&label) {
                time_slots.push(label);
            }
        }
        user.delivery_active_info = Some(DeliveryActiveInfo { time_slots });

        self.storage.put_user(&user)?;
        tracing::info!(user_id = %user_id, slots = ?user.active_slots(), "Active slots updated");
        Ok(user)
    }
}

#[cfg(test)]
mod tests;
