//! Data models
//!
//! Documents stored by order-server and returned over the API.
//! Wire format is camelCase JSON.

pub mod order;
pub mod time_slot;
pub mod user;

// Re-exports
pub use order::*;
pub use time_slot::*;
pub use user::*;
