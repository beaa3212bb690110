//! 时段表路由 (任意已登录用户)

use axum::{Json, Router, extract::State, routing::get};
use shared::error::ApiResponse;
use shared::models::TimeSlot;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/time-slots", get(list))
}

/// GET /api/time-slots - 按优先级排列
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<TimeSlot>>> {
    Json(ApiResponse::success(
        state.orders().time_slots().slots().to_vec(),
    ))
}
