//! Call machinery shared by both clients.

pub mod call;
pub mod operation;
pub mod retry;
pub mod routing;

pub use call::CallOptions;
pub use operation::{Operation, RequestBuilder};
pub use retry::RetryPolicy;
