//! Disk scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Track` | Track address on the simulated disk |
//! | `DiskConfig` | Disk geometry (number of tracks) |
//! | `Direction` | Initial SCAN sweep direction |
//! | `ServiceSequence` | Head positions in service order |

mod direction;
mod disk;
mod sequence;

pub use direction::Direction;
pub use disk::{DiskConfig, Track, DEFAULT_DISK_SIZE};
pub use sequence::ServiceSequence;
