//! Disk geometry model.
//!
//! The simulated disk is a single platter surface with `disk_size`
//! addressable tracks numbered `0..disk_size`.

use serde::{Deserialize, Serialize};

/// A track address on the simulated disk.
///
/// Signed so that out-of-range head positions can be represented and
/// scheduled without wrapping; the engine treats them as degenerate input,
/// not as errors.
pub type Track = i64;

/// Number of tracks on the default simulated disk.
pub const DEFAULT_DISK_SIZE: i64 = 200;

/// Simulated disk configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    /// Number of addressable tracks.
    pub disk_size: i64,
}

impl DiskConfig {
    /// Creates a configuration with the default disk size.
    pub fn new() -> Self {
        Self {
            disk_size: DEFAULT_DISK_SIZE,
        }
    }

    /// Sets the number of tracks.
    pub fn with_disk_size(mut self, disk_size: i64) -> Self {
        self.disk_size = disk_size;
        self
    }

    /// Highest addressable track (`disk_size - 1`).
    pub fn max_track(&self) -> Track {
        self.disk_size - 1
    }

    /// Lowest addressable track.
    pub fn min_track(&self) -> Track {
        0
    }

    /// Whether `track` lies on the disk.
    pub fn contains(&self, track: Track) -> bool {
        (self.min_track()..=self.max_track()).contains(&track)
    }
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self::new()
    }
}
