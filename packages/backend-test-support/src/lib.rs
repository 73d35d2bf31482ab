//! Backend test support utilities
//!
//! Shared by the backend's integration tests: logging bootstrap,
//! problem-details assertions and deck YAML builders. Independent of the
//! backend crate itself.

pub mod deck_yaml;
pub mod logging;
pub mod problem_details;
