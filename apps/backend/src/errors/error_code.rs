//! Error codes for the UnfoldFate HTTP surface.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in problem-details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General bad request error
    BadRequest,
    /// `x-reader-id` header is not a usable reader identity
    InvalidReaderId,

    // Resource Not Found
    /// No route matched the request
    NotFound,

    // System Errors
    /// Deck or server configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidReaderId => "INVALID_READER_ID",
            Self::NotFound => "NOT_FOUND",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 4] = [
        Self::BadRequest,
        Self::InvalidReaderId,
        Self::NotFound,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
