//! Kitchen API Module
//!
//! Status updates from the kitchen and the three per-day kitchen queues.

mod handler;

use axum::{Router, middleware, routing::get, routing::post};
use shared::models::Role;

use crate::auth::require_role;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/chef", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/update-item-status", post(handler::update_item_status))
        .route("/pending-orders", get(handler::pending_orders))
        .route("/received-orders", get(handler::received_orders))
        .route("/done-orders", get(handler::done_orders))
        .layer(middleware::from_fn(require_role(&[Role::Chef])))
}
