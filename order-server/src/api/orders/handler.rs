//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use shared::error::ApiResponse;
use shared::models::{Order, Role};
use shared::order::CancelOrderRequest;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::orders::ActionContext;
use crate::orders::actions::CancelOrderAction;
use crate::utils::{AppError, AppResult};

/// GET /api/orders/{id} - staff, or the owning customer
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.orders().get_order(&id, &user.id, user.role)?;
    Ok(Json(ApiResponse::success(order)))
}

/// POST /api/orders/cancel - admin, or the owning customer
pub async fn cancel(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<CancelOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    req.validate()?;
    if !user.has_role(Role::Customer) {
        return Err(AppError::forbidden("Only admins or the ordering customer can cancel"));
    }

    let action = CancelOrderAction {
        order_id: req.order_id,
        day_id: req.day_id,
        reason: req.reason,
    };
    let ctx = ActionContext::new(&user.id, user.role, Utc::now());
    let order = state.orders().execute(action, &ctx)?;

    tracing::info!(order_id = %order.id, cancelled_by = %user.id, "Order cancelled");
    Ok(Json(ApiResponse::success(order)))
}
