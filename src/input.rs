//! Text input parsing.
//!
//! Front-ends collect requests as free text ("98 183 37 ...") and the head
//! position as a single number. Malformed text is rejected here with
//! `InvalidInput` so it never reaches the policies.

use crate::error::{DiskScheduleError, Result};
use crate::models::Track;

/// Parses whitespace-separated track numbers.
///
/// Empty or blank text yields an empty request list.
pub fn parse_requests(text: &str) -> Result<Vec<Track>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<Track>().map_err(|_| {
                DiskScheduleError::InvalidInput(format!("not a track number: {token:?}"))
            })
        })
        .collect()
}

/// Parses a single head position.
pub fn parse_head(text: &str) -> Result<Track> {
    let trimmed = text.trim();
    trimmed.parse::<Track>().map_err(|_| {
        DiskScheduleError::InvalidInput(format!("not a head position: {trimmed:?}"))
    })
}
