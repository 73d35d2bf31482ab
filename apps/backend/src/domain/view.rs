//! Read-only snapshot of a reading, as handed to the transports.

use serde::Serialize;

use crate::domain::cards::Card;

/// One grid position.
///
/// Face-down positions expose only the back image; the revealed position
/// also carries the card's name, description and face image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub position: usize,
    pub image: String,
    pub face_up: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CardView {
    pub(crate) fn face_down(position: usize, back_image: &str) -> Self {
        Self {
            position,
            image: back_image.to_string(),
            face_up: false,
            name: None,
            description: None,
        }
    }

    pub(crate) fn face_up(position: usize, card: &Card) -> Self {
        Self {
            position,
            image: card.image_filename.clone(),
            face_up: true,
            name: Some(card.name.clone()),
            description: Some(card.description.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingView {
    pub back_image: String,
    pub accepting_selection: bool,
    pub revealed: Option<Card>,
    pub cards: Vec<CardView>,
}

impl ReadingView {
    /// Grid position of the revealed card, if any.
    pub fn revealed_position(&self) -> Option<usize> {
        self.cards.iter().position(|c| c.face_up)
    }

    pub fn face_down_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.face_up).count()
    }
}
