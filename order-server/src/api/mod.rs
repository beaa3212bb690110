//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查 (公共)
//! - [`chef`] - 厨房状态更新与厨房队列
//! - [`delivery`] - 配送状态、货到付款确认、可配送订单、在岗时段
//! - [`orders`] - 订单查询与取消
//! - [`time_slots`] - 时段表

pub mod chef;
pub mod delivery;
pub mod health;
pub mod orders;
pub mod time_slots;

use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no global middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(health::router())
        // Kitchen API - chef role
        .merge(chef::router())
        // Delivery API - delivery role
        .merge(delivery::router())
        // Order API - owner or staff
        .merge(orders::router())
        .merge(time_slots::router())
}

/// Build a fully configured application with all middleware
///
/// Used by the HTTP server and by the integration tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let x_request_id = HeaderName::from_static("x-request-id");

    build_router()
        // JWT 认证 - 注入 CurrentUser；require_auth 内部跳过公共路由
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        .layer(TimeoutLayer::with_status_code(
            http::StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(state.config.request_timeout_ms),
        ))
        // ========== Tower HTTP Middleware ==========
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        // Request ID - outermost so every inner layer sees it
        .layer(SetRequestIdLayer::new(x_request_id, XRequestId))
}
