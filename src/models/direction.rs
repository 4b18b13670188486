//! Sweep direction for SCAN.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DiskScheduleError;

/// Initial sweep direction of the disk head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward track 0.
    Left,
    /// Toward the highest track.
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DiskScheduleError;

    /// Accepts `Left` or `Right`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("left") {
            Ok(Direction::Left)
        } else if trimmed.eq_ignore_ascii_case("right") {
            Ok(Direction::Right)
        } else {
            Err(DiskScheduleError::InvalidDirection(s.to_string()))
        }
    }
}
