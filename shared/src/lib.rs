//! Shared types for the order service
//!
//! Order documents, status vocabularies, users, the time-slot table and
//! the unified error/response types used by order-server and its clients.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
