//! Delivery API Module

mod handler;

use axum::{Router, middleware, routing::post, routing::put};
use shared::models::Role;

use crate::auth::require_role;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/delivery", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/update-status", post(handler::update_status))
        .route("/confirm-payment", post(handler::confirm_payment))
        .route("/orders", post(handler::eligible_orders))
        .route("/active-slots", put(handler::set_active_slots))
        .layer(middleware::from_fn(require_role(&[Role::Delivery])))
}
