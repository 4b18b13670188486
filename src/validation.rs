//! Input validation for disk scheduling problems.
//!
//! The policies accept any integers: out-of-range heads or tracks produce
//! well-defined (if degenerate) sequences rather than errors. Front-ends
//! that want to reject such input before scheduling can run these checks.
//! Detects:
//! - Non-positive disk size
//! - Requests outside `[0, disk_size - 1]`
//! - Head position outside `[0, disk_size - 1]`

use crate::models::{DiskConfig, Track};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The disk has no tracks.
    InvalidDiskSize,
    /// A request addresses a track that doesn't exist.
    TrackOutOfRange,
    /// The head starts off the disk.
    HeadOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a request set and head position against a disk.
///
/// Checks:
/// 1. The disk has at least one track
/// 2. Every request lies on the disk
/// 3. The head lies on the disk
///
/// Duplicates and empty request sets are valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(requests: &[Track], head: Track, config: &DiskConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.disk_size <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDiskSize,
            format!("Disk size must be positive, got {}", config.disk_size),
        ));
    }

    for (i, &track) in requests.iter().enumerate() {
        if !config.contains(track) {
            errors.push(ValidationError::new(
                ValidationErrorKind::TrackOutOfRange,
                format!(
                    "Request #{i} targets track {track}, outside 0..={}",
                    config.max_track()
                ),
            ));
        }
    }

    if !config.contains(head) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!(
                "Head position {head} is outside 0..={}",
                config.max_track()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
