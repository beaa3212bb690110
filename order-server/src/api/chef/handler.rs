//! Kitchen API Handlers
//!
//! - POST /api/chef/update-item-status - received / done
//! - GET  /api/chef/{pending,received,done}-orders?date=YYYY-MM-DD

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use shared::error::ApiResponse;
use shared::models::Order;
use shared::order::{ItemStatusUpdate, KitchenQueueRow, KitchenStatus, QueueQuery};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::orders::actions::UpdateItemStatusAction;
use crate::orders::{ActionContext, QueueKind};
use crate::utils::AppResult;
use crate::utils::time::date_or_today;

/// POST /api/chef/update-item-status
pub async fn update_item_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<ItemStatusUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    req.validate()?;
    let status: KitchenStatus = req.status.parse()?;

    let action = UpdateItemStatusAction {
        order_id: req.order_id,
        day_id: req.day_id,
        status,
        at: req.chef_time,
    };
    let ctx = ActionContext::new(&user.id, user.role, Utc::now());
    let order = state.orders().execute(action, &ctx)?;

    Ok(Json(ApiResponse::success(order)))
}

/// GET /api/chef/pending-orders - 不按厨师过滤
pub async fn pending_orders(
    state: State<ServerState>,
    user: CurrentUser,
    query: Query<QueueQuery>,
) -> AppResult<Json<ApiResponse<Vec<KitchenQueueRow>>>> {
    queue(state, user, query, QueueKind::Pending)
}

/// GET /api/chef/received-orders - 仅当前厨师
pub async fn received_orders(
    state: State<ServerState>,
    user: CurrentUser,
    query: Query<QueueQuery>,
) -> AppResult<Json<ApiResponse<Vec<KitchenQueueRow>>>> {
    queue(state, user, query, QueueKind::Received)
}

/// GET /api/chef/done-orders - 仅当前厨师
pub async fn done_orders(
    state: State<ServerState>,
    user: CurrentUser,
    query: Query<QueueQuery>,
) -> AppResult<Json<ApiResponse<Vec<KitchenQueueRow>>>> {
    queue(state, user, query, QueueKind::Done)
}

fn queue(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<QueueQuery>,
    kind: QueueKind,
) -> AppResult<Json<ApiResponse<Vec<KitchenQueueRow>>>> {
    let date = date_or_today(query.date.as_deref(), Utc::now(), state.config.timezone)?;
    let rows = state.orders().kitchen_queue(kind, &user.id, date)?;
    Ok(Json(ApiResponse::success(rows)))
}
