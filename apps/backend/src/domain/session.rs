//! Reading session: the shuffled order, the revealed card and the
//! reveal/reset state machine.
//!
//! ```text
//! FRESH    --select(valid i)-->   REVEALED
//! FRESH    --select(invalid i)--> FRESH      (no-op)
//! REVEALED --select(any i)-->     REVEALED   (no-op)
//! any      --new_reading-->       FRESH      (new permutation)
//! ```
//!
//! Selection problems are never errors: they come back as
//! [`SelectOutcome::Ignored`] and leave the session untouched.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::cards::{Card, Deck};
use crate::domain::shuffle::fisher_yates;
use crate::domain::view::{CardView, ReadingView};

/// Why a selection left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Index outside `0..22`.
    OutOfRange,
    /// A card is already revealed in this reading.
    AlreadyRevealed,
    /// The transport could not read an integer from the request.
    NotANumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Revealed { position: usize },
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, SelectOutcome::Revealed { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ReadingSession {
    deck: Arc<Deck>,
    /// Permutation of deck indices.
    order: Vec<usize>,
    /// Deck index of the revealed card. Unaffected by reshuffling `order`.
    revealed: Option<usize>,
    rng: ChaCha8Rng,
}

impl ReadingSession {
    /// Start a FRESH reading over `deck`, seeded from the operating system.
    ///
    /// Card count and back image were checked when `deck` was built, so
    /// this cannot fail.
    pub fn initialize(deck: Arc<Deck>) -> Self {
        Self::with_rng(deck, ChaCha8Rng::from_os_rng())
    }

    /// Start a FRESH reading with a reproducible shuffle sequence.
    pub fn initialize_with_seed(deck: Arc<Deck>, seed: u64) -> Self {
        Self::with_rng(deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(deck: Arc<Deck>, rng: ChaCha8Rng) -> Self {
        let mut session = Self {
            order: (0..deck.len()).collect(),
            deck,
            revealed: None,
            rng,
        };
        session.shuffle();
        session
    }

    /// Redraw `order` in place. Does not touch the revealed card.
    pub fn shuffle(&mut self) {
        fisher_yates(&mut self.order, &mut self.rng);
        debug!(first = self.order[0], "Deck shuffled");
    }

    /// Clear the revealed card and reshuffle.
    pub fn new_reading(&mut self) {
        self.revealed = None;
        self.shuffle();
        info!("New reading started");
    }

    /// Reveal the card at `index` if this reading has no revealed card yet.
    pub fn select_card(&mut self, index: i64) -> SelectOutcome {
        let (position, deck_index) = match usize::try_from(index)
            .ok()
            .and_then(|p| self.order.get(p).map(|&i| (p, i)))
        {
            Some(found) => found,
            None => return self.ignore(index, IgnoreReason::OutOfRange),
        };

        if self.revealed.is_some() {
            return self.ignore(index, IgnoreReason::AlreadyRevealed);
        }

        self.revealed = Some(deck_index);
        info!(
            position,
            card = %self.deck.cards()[deck_index].name,
            "Card revealed"
        );
        SelectOutcome::Revealed { position }
    }

    fn ignore(&self, index: i64, reason: IgnoreReason) -> SelectOutcome {
        debug!(index, ?reason, "Selection ignored");
        SelectOutcome::Ignored(reason)
    }

    /// Snapshot of what the reader currently sees.
    pub fn current_view(&self) -> ReadingView {
        let back_image = self.deck.back_image();
        let cards = self
            .order
            .iter()
            .enumerate()
            .map(|(position, &deck_index)| {
                if self.revealed == Some(deck_index) {
                    CardView::face_up(position, &self.deck.cards()[deck_index])
                } else {
                    CardView::face_down(position, back_image)
                }
            })
            .collect();

        ReadingView {
            back_image: back_image.to_string(),
            accepting_selection: self.accepting_selection(),
            revealed: self.revealed().cloned(),
            cards,
        }
    }

    /// Cards in their current shuffled order.
    pub fn order(&self) -> impl Iterator<Item = &Card> + '_ {
        let cards = self.deck.cards();
        self.order.iter().map(move |&i| &cards[i])
    }

    pub fn card_at(&self, position: usize) -> Option<&Card> {
        self.order
            .get(position)
            .map(|&i| &self.deck.cards()[i])
    }

    pub fn revealed(&self) -> Option<&Card> {
        self.revealed.map(|i| &self.deck.cards()[i])
    }

    /// Current grid position of the revealed card.
    pub fn revealed_position(&self) -> Option<usize> {
        let deck_index = self.revealed?;
        self.order.iter().position(|&i| i == deck_index)
    }

    pub fn accepting_selection(&self) -> bool {
        self.revealed.is_none()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::DECK_SIZE;

    fn deck() -> Arc<Deck> {
        let cards = (0..DECK_SIZE)
            .map(|i| Card::new(format!("Arcana {i}"), format!("Meaning {i}"), format!("/img/{i}.png")))
            .collect();
        Arc::new(Deck::new("/img/back.jpg", cards).unwrap())
    }

    #[test]
    fn initialize_is_fresh() {
        let session = ReadingSession::initialize_with_seed(deck(), 1);
        assert!(session.accepting_selection());
        assert_eq!(session.revealed(), None);
        assert_eq!(session.order().count(), DECK_SIZE);
    }

    #[test]
    fn initialize_from_os_rng_is_fresh() {
        let session = ReadingSession::initialize(deck());
        assert!(session.accepting_selection());
    }

    #[test]
    fn select_reveals_card_at_position() {
        let mut session = ReadingSession::initialize_with_seed(deck(), 2);
        let expected = session.card_at(5).cloned();

        let outcome = session.select_card(5);
        assert_eq!(outcome, SelectOutcome::Revealed { position: 5 });
        assert!(outcome.changed());
        assert_eq!(session.revealed().cloned(), expected);
        assert!(!session.accepting_selection());
    }

    #[test]
    fn second_select_is_ignored() {
        let mut session = ReadingSession::initialize_with_seed(deck(), 3);
        session.select_card(5);
        let before = session.revealed().cloned();

        let outcome = session.select_card(7);
        assert_eq!(outcome, SelectOutcome::Ignored(IgnoreReason::AlreadyRevealed));
        assert!(!outcome.changed());
        assert_eq!(session.revealed().cloned(), before);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut session = ReadingSession::initialize_with_seed(deck(), 4);
        for index in [-1, 22, 100, i64::MIN, i64::MAX] {
            assert_eq!(
                session.select_card(index),
                SelectOutcome::Ignored(IgnoreReason::OutOfRange)
            );
        }
        assert!(session.accepting_selection());
    }

    #[test]
    fn out_of_range_reported_before_already_revealed() {
        let mut session = ReadingSession::initialize_with_seed(deck(), 5);
        session.select_card(0);
        assert_eq!(
            session.select_card(40),
            SelectOutcome::Ignored(IgnoreReason::OutOfRange)
        );
    }

    #[test]
    fn new_reading_returns_to_fresh() {
        let mut session = ReadingSession::initialize_with_seed(deck(), 6);
        session.select_card(3);
        session.new_reading();
        assert!(session.accepting_selection());
        assert_eq!(session.revealed_position(), None);
        assert!(session.select_card(3).changed());
    }

    #[test]
    fn shuffle_keeps_revealed_card() {
        for seed in 0..50 {
            let mut session = ReadingSession::initialize_with_seed(deck(), seed);
            session.select_card(5);
            let before = session.revealed().cloned();

            session.shuffle();

            assert_eq!(session.revealed().cloned(), before, "seed {seed}");
            assert!(!session.accepting_selection());
            let position = session.revealed_position().unwrap();
            assert_eq!(session.card_at(position).cloned(), before);

            let view = session.current_view();
            assert_eq!(view.revealed, before);
            assert_eq!(view.revealed_position(), Some(position));
            assert_eq!(view.face_down_count(), DECK_SIZE - 1);
        }
    }

    #[test]
    fn view_exposes_only_revealed_face() {
        let mut session = ReadingSession::initialize_with_seed(deck(), 8);
        session.select_card(5);
        let view = session.current_view();

        assert_eq!(view.cards.len(), DECK_SIZE);
        assert_eq!(view.revealed_position(), Some(5));
        assert_eq!(view.face_down_count(), DECK_SIZE - 1);
        for card in view.cards.iter().filter(|c| !c.face_up) {
            assert_eq!(card.image, "/img/back.jpg");
            assert!(card.name.is_none());
        }
        let face = &view.cards[5];
        assert_ne!(face.image, view.back_image);
        assert_eq!(face.name.as_deref(), view.revealed.as_ref().map(|c| c.name.as_str()));
    }
}
