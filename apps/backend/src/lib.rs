#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod test_support;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{ServerConfig, Transport};
pub use domain::{Card, Deck, ReadingSession, ReadingView, SelectOutcome, DECK_SIZE};
pub use error::AppError;
pub use errors::{ConfigError, ErrorCode};
pub use middleware::{AccessLog, RequestTrace};
pub use state::{build_state, AppState, ReaderId, ReadingStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
