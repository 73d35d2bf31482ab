//! YAML deck description.
//!
//! The file is parsed into [`DeckFile`], an explicit mirror of its layout,
//! and only then validated into a [`Deck`]:
//!
//! ```yaml
//! back_ground:
//!   - image_filename: /img/rider-waite-tarot_bg.jpg
//! major_arcana:
//!   - name: The Fool
//!     description: Beginnings, innocence, spontaneity, a free spirit.
//!     image_filename: /img/major_arcana_fool.png
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::cards::{Card, Deck};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct DeckFile {
    pub back_ground: Vec<BackGroundEntry>,
    pub major_arcana: Vec<CardEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackGroundEntry {
    pub image_filename: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardEntry {
    pub name: String,
    pub description: String,
    pub image_filename: String,
}

impl DeckFile {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Validate cardinality and build the immutable deck.
    pub fn into_deck(self) -> Result<Deck, ConfigError> {
        let [back] = <[BackGroundEntry; 1]>::try_from(self.back_ground)
            .map_err(|entries| ConfigError::BackImageCount(entries.len()))?;

        let cards = self
            .major_arcana
            .into_iter()
            .map(|entry| Card::new(entry.name, entry.description, entry.image_filename))
            .collect();

        Deck::new(back.image_filename, cards)
    }
}

impl Deck {
    /// Parse and validate a YAML deck description.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        DeckFile::from_yaml_str(source)?.into_deck()
    }

    /// Read, parse and validate the deck file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let deck = Self::from_yaml_str(&source)?;
        info!(
            path = %path.display(),
            cards = deck.len(),
            back_image = deck.back_image(),
            "Deck loaded"
        );
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::DECK_SIZE;

    fn yaml(backs: usize, cards: usize) -> String {
        let mut out = String::from(if backs == 0 { "back_ground: []\n" } else { "back_ground:\n" });
        for i in 0..backs {
            out.push_str(&format!("  - image_filename: /img/back_{i}.jpg\n"));
        }
        out.push_str(if cards == 0 { "major_arcana: []\n" } else { "major_arcana:\n" });
        for i in 0..cards {
            out.push_str(&format!(
                "  - name: Card {i}\n    description: Meaning {i}\n    image_filename: /img/card_{i}.png\n"
            ));
        }
        out
    }

    #[test]
    fn parses_valid_description() {
        let deck = Deck::from_yaml_str(&yaml(1, DECK_SIZE)).unwrap();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.back_image(), "/img/back_0.jpg");
        assert_eq!(deck.cards()[4].name, "Card 4");
        assert_eq!(deck.cards()[4].description, "Meaning 4");
    }

    #[test]
    fn back_image_must_be_single() {
        let err = Deck::from_yaml_str(&yaml(0, DECK_SIZE)).unwrap_err();
        assert!(matches!(err, ConfigError::BackImageCount(0)));

        let err = Deck::from_yaml_str(&yaml(2, DECK_SIZE)).unwrap_err();
        assert!(matches!(err, ConfigError::BackImageCount(2)));
    }

    #[test]
    fn card_count_must_be_twenty_two() {
        let err = Deck::from_yaml_str(&yaml(1, 10)).unwrap_err();
        assert!(matches!(err, ConfigError::CardCount { found: 10, .. }));
    }

    #[test]
    fn missing_field_is_parse_error() {
        let source = "back_ground:\n  - image_filename: /img/b.jpg\nmajor_arcana:\n  - name: The Fool\n";
        let err = Deck::from_yaml_str(source).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Deck::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
