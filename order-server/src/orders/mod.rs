//! Order lifecycle module
//!
//! - **actions**: kitchen / delivery / payment / cancellation mutations
//! - **manager**: OrdersManager, load → apply → save under a version check
//! - **storage**: redb document store for orders and users
//! - **eligibility**: delivery time-slot matching
//! - **queue**: kitchen queues per day
//!
//! # Data Flow
//!
//! ```text
//! HTTP handler → Action → OrdersManager → OrderStorage (redb)
//!                              ↓
//!                        saved Order
//! ```

pub mod actions;
pub mod eligibility;
pub mod manager;
pub mod money;
pub mod queue;
pub mod storage;
pub mod traits;

// Re-exports
pub use actions::LifecycleAction;
pub use manager::{ManagerError, ManagerResult, OrdersManager};
pub use queue::QueueKind;
pub use storage::{OrderStorage, StorageError};
pub use traits::{ActionContext, OrderAction, OrderError};
