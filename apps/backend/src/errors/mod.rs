//! Error handling for the UnfoldFate backend.

pub mod config;
pub mod error_code;

pub use config::ConfigError;
pub use error_code::ErrorCode;
