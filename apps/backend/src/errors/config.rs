//! Deck configuration errors.
//!
//! Raised while loading and validating the deck description at startup.
//! Any of these is fatal: the service must not start serving with a
//! partially valid deck.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read deck file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck description: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("deck must define exactly one back image, found {0}")]
    BackImageCount(usize),

    #[error("deck back image reference is empty")]
    MissingBackImage,

    #[error("deck must contain exactly {expected} major arcana cards, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("card #{position} has an empty `{field}`")]
    EmptyField {
        position: usize,
        field: &'static str,
    },

    #[error("card `{name}` uses the back image as its face")]
    FaceMatchesBack { name: String },
}
