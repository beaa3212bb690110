//! Delivery API Handlers
//!
//! - POST /api/delivery/update-status - picked / delivered / not-delivered
//! - POST /api/delivery/confirm-payment - COD collected
//! - POST /api/delivery/orders - orders for the worker's current slot
//! - PUT  /api/delivery/active-slots - replace the worker's slot set

use axum::{Json, extract::State};
use chrono::Utc;
use shared::error::ApiResponse;
use shared::models::{Order, User};
use shared::order::{
    ActiveSlotsUpdate, CodPaymentConfirm, DeliveryOrderRow, DeliveryStatus,
    DeliveryStatusUpdate, EligibleOrdersRequest,
};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::orders::ActionContext;
use crate::orders::actions::{ConfirmCodPaymentAction, UpdateDeliveryStatusAction};
use crate::utils::AppResult;

/// POST /api/delivery/update-status
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<DeliveryStatusUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    req.validate()?;
    let status: DeliveryStatus = req.status.parse()?;

    let action = UpdateDeliveryStatusAction {
        order_id: req.order_id,
        day_id: req.day_id,
        status,
        at: req.delivery_time,
    };
    let ctx = ActionContext::new(&user.id, user.role, Utc::now());
    let order = state.orders().execute(action, &ctx)?;

    Ok(Json(ApiResponse::success(order)))
}

/// POST /api/delivery/confirm-payment
pub async fn confirm_payment(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<CodPaymentConfirm>,
) -> AppResult<Json<ApiResponse<Order>>> {
    req.validate()?;

    let action = ConfirmCodPaymentAction {
        order_id: req.order_id,
        day_id: req.day_id,
    };
    let ctx = ActionContext::new(&user.id, user.role, Utc::now());
    let order = state.orders().execute(action, &ctx)?;

    tracing::info!(order_id = %order.id, collected_by = %user.id, "COD payment confirmed");
    Ok(Json(ApiResponse::success(order)))
}

/// POST /api/delivery/orders
///
/// Body `{hour, minutes}` is the worker's wall clock; minutes ≥ 30 round up
/// to the next hour when picking the slot.
pub async fn eligible_orders(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<EligibleOrdersRequest>,
) -> AppResult<Json<ApiResponse<Vec<DeliveryOrderRow>>>> {
    req.validate()?;
    let rows = state
        .orders()
        .eligible_orders(&user.id, req.hour, req.minutes, Utc::now())?;
    Ok(Json(ApiResponse::success(rows)))
}

/// PUT /api/delivery/active-slots
pub async fn set_active_slots(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<ActiveSlotsUpdate>,
) -> AppResult<Json<ApiResponse<User>>> {
    req.validate()?;
    let updated = state.orders().set_active_slots(&user.id, req.time_slots)?;
    Ok(Json(ApiResponse::success(updated)))
}
