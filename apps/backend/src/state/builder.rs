use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::Deck;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::readings::ReadingStore;

enum DeckSource {
    Unset,
    Path(PathBuf),
    Loaded(Deck),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    deck: DeckSource,
    seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            deck: DeckSource::Unset,
            seed: None,
        }
    }

    /// Load the deck from a YAML file at build time.
    pub fn with_deck_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.deck = DeckSource::Path(path.into());
        self
    }

    /// Use an already validated deck.
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = DeckSource::Loaded(deck);
        self
    }

    /// Make every shuffle reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let deck = match self.deck {
            DeckSource::Unset => {
                return Err(AppError::config("no deck configured for application state"))
            }
            DeckSource::Path(path) => Deck::load(path)?,
            DeckSource::Loaded(deck) => deck,
        };

        let deck = Arc::new(deck);
        let store = match self.seed {
            Some(seed) => ReadingStore::seeded(deck, seed),
            None => ReadingStore::new(deck),
        };
        Ok(AppState::new(store))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
