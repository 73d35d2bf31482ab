//! Card index parsing shared by both transports.

use crate::domain::IgnoreReason;

/// Parse a raw card index as sent by a client.
///
/// Anything that is not an integer yields [`IgnoreReason::NotANumber`];
/// range checking is left to the session.
pub fn parse_card_index(raw: Option<&str>) -> Result<i64, IgnoreReason> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(IgnoreReason::NotANumber)
}
