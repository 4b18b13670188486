//! Disk-head scheduling policies.
//!
//! Every policy maps the same input shape (pending requests plus the
//! initial head position) to a [`ServiceSequence`]. Total head movement is
//! read off the sequence.
//!
//! | Policy | Order |
//! |--------|-------|
//! | FCFS | Input order, no reordering |
//! | SSTF | Closest remaining request first |
//! | SCAN | Sweep to one disk boundary, then back |
//!
//! # Usage
//!
//! ```
//! use disk_schedule::models::Direction;
//! use disk_schedule::policies::{self, SchedulingPolicy, Scan};
//!
//! let requests = [98, 183, 37, 122, 14, 124, 65, 67];
//! assert_eq!(policies::fcfs(&requests, 53).total_movement(), 640);
//!
//! let scan = Scan::new(Direction::Left);
//! assert_eq!(scan.label(), "SCAN (Left)");
//! assert_eq!(scan.schedule(&requests, 53).total_movement(), 236);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2

mod fcfs;
mod scan;
mod sstf;

pub use fcfs::Fcfs;
pub use scan::Scan;
pub use sstf::Sstf;

use std::fmt::Debug;

use crate::error::Result;
use crate::models::{Direction, ServiceSequence, Track};

/// A disk-head scheduling policy.
///
/// Implementations are pure: the same requests and head always produce the
/// same sequence, and no state survives between calls.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SSTF").
    fn name(&self) -> &'static str;

    /// Computes the order in which `requests` are serviced from `head`.
    fn schedule(&self, requests: &[Track], head: Track) -> ServiceSequence;

    /// Display label, including any parameters.
    fn label(&self) -> String {
        self.name().to_string()
    }

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Services requests in input order.
pub fn fcfs(requests: &[Track], head: Track) -> ServiceSequence {
    Fcfs.schedule(requests, head)
}

/// Services the closest remaining request first.
pub fn sstf(requests: &[Track], head: Track) -> ServiceSequence {
    Sstf.schedule(requests, head)
}

/// Sweeps toward `direction`'s boundary on the default disk, then reverses.
pub fn scan(requests: &[Track], head: Track, direction: Direction) -> ServiceSequence {
    Scan::new(direction).schedule(requests, head)
}

/// Like [`scan()`], with the direction given as text.
///
/// Fails with `InvalidDirection` for anything other than `Left`/`Right`.
pub fn scan_named(requests: &[Track], head: Track, direction: &str) -> Result<ServiceSequence> {
    Ok(scan(requests, head, direction.parse()?))
}
