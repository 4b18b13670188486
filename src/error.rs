//! Error types for disk scheduling.

use thiserror::Error;

/// Errors surfaced by the scheduling engine and its input helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiskScheduleError {
    /// SCAN direction other than `Left` or `Right`.
    #[error("invalid scan direction: {0:?} (expected \"Left\" or \"Right\")")]
    InvalidDirection(String),

    /// Text that does not parse to track numbers.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// More distinct requests asked for than the disk has tracks.
    #[error("cannot sample {requested} distinct tracks from a disk of {disk_size}")]
    TooManyRequests { requested: usize, disk_size: i64 },
}

pub type Result<T> = std::result::Result<T, DiskScheduleError>;
