pub mod access_log;
pub mod request_trace;

pub use access_log::AccessLog;
pub use request_trace::{RequestTrace, TraceId};
