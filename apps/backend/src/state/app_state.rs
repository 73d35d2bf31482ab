use std::sync::Arc;

use super::readings::ReadingStore;
use crate::domain::Deck;

/// Application state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reading sessions, keyed by reader
    pub readings: Arc<ReadingStore>,
}

impl AppState {
    pub fn new(readings: ReadingStore) -> Self {
        Self {
            readings: Arc::new(readings),
        }
    }

    /// The deck every session is drawn from.
    pub fn deck(&self) -> &Deck {
        self.readings.deck()
    }
}
