//! Order API Module
//!
//! Lookup and cancellation. Ownership is checked per order, so these routes
//! carry no role layer.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/cancel", post(handler::cancel))
        .route("/{id}", get(handler::get_by_id))
}
