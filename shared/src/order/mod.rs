//! Order lifecycle vocabulary shared with clients

mod request;
mod types;
mod view;

pub use request::*;
pub use types::*;
pub use view::*;

/// QuickSip slot value that matches every delivery slot
pub const ASAP: &str = "ASAP";

/// Reason stamped when a driver reports the customer unreachable
pub const NOT_DELIVERED_REASON: &str = "Customer not available at delivery location";
