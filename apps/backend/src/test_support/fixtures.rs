use crate::domain::{Card, Deck, DECK_SIZE};
use crate::state::app_state::AppState;
use crate::state::builder::build_state;

/// Back image of [`fixture_deck`].
pub const FIXTURE_BACK_IMAGE: &str = "/img/fixture_back.jpg";

/// The Rider-Waite deck shipped with the crate.
pub const BUNDLED_DECK_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/rider-waite-tarot.yaml");

/// A valid 22-card deck with predictable names and images:
/// card `i` is `"Arcanum {i}"` with face `/img/arcanum_{i:02}.png`.
pub fn fixture_deck() -> Deck {
    let cards = (0..DECK_SIZE)
        .map(|i| {
            Card::new(
                format!("Arcanum {i}"),
                format!("Meaning of arcanum {i}"),
                format!("/img/arcanum_{i:02}.png"),
            )
        })
        .collect();
    Deck::new(FIXTURE_BACK_IMAGE, cards).expect("fixture deck is valid")
}

/// Application state over [`fixture_deck`] with reproducible shuffles.
pub fn fixture_state(seed: u64) -> AppState {
    build_state()
        .with_deck(fixture_deck())
        .with_seed(seed)
        .build()
        .expect("fixture state builds")
}
