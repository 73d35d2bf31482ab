//! Cards and the validated deck.

use serde::Serialize;

use crate::errors::ConfigError;

/// Number of major arcana cards in a deck.
pub const DECK_SIZE: usize = 22;

/// A single tarot card. Identity is its position in the configured deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub name: String,
    pub description: String,
    /// Face image, shown only once the card is revealed.
    pub image_filename: String,
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_filename: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_filename: image_filename.into(),
        }
    }
}

/// The fixed set of 22 cards plus the shared back image.
///
/// A `Deck` can only be built through [`Deck::new`], so holding one means
/// the cardinality and image rules below have already been checked:
/// - exactly [`DECK_SIZE`] cards
/// - a non-empty back image
/// - every card has a non-empty name and face image
/// - no face image equals the back image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    back_image: String,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(back_image: impl Into<String>, cards: Vec<Card>) -> Result<Self, ConfigError> {
        let back_image = back_image.into();
        if back_image.trim().is_empty() {
            return Err(ConfigError::MissingBackImage);
        }

        if cards.len() != DECK_SIZE {
            return Err(ConfigError::CardCount {
                expected: DECK_SIZE,
                found: cards.len(),
            });
        }

        for (position, card) in cards.iter().enumerate() {
            if card.name.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    position,
                    field: "name",
                });
            }
            if card.image_filename.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    position,
                    field: "image_filename",
                });
            }
            if card.image_filename == back_image {
                return Err(ConfigError::FaceMatchesBack {
                    name: card.name.clone(),
                });
            }
        }

        Ok(Self { back_image, cards })
    }

    /// Image used for every face-down card.
    pub fn back_image(&self) -> &str {
        &self.back_image
    }

    /// Cards in configured order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
