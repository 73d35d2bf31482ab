//! Domain layer: the deck and the reading state machine. No HTTP here.

pub mod cards;
pub mod deck_file;
pub mod session;
pub mod shuffle;
pub mod view;

pub use cards::{Card, Deck, DECK_SIZE};
pub use session::{IgnoreReason, ReadingSession, SelectOutcome};
pub use view::{CardView, ReadingView};
