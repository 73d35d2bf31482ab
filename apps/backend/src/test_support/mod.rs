//! Helpers shared by unit and integration tests.

pub mod app_builder;
pub mod fixtures;

pub use app_builder::{create_test_app_builder, TestAppBuilder};
pub use fixtures::{fixture_deck, fixture_state, BUNDLED_DECK_PATH, FIXTURE_BACK_IMAGE};
