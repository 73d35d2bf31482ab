pub mod app_state;
pub mod builder;
pub mod readings;

pub use app_state::AppState;
pub use builder::{build_state, StateBuilder};
pub use readings::{ReaderId, ReadingStore};
