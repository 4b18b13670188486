//! SCAN (elevator) policy.

use tracing::debug;

use super::SchedulingPolicy;
use crate::models::{Direction, DiskConfig, ServiceSequence, Track};

/// SCAN: bidirectional sweep to the disk boundary.
///
/// The head moves toward `direction`, servicing every request on the way,
/// travels all the way to that disk boundary (track `0` or
/// `disk_size - 1`) even if nothing is requested there, then reverses and
/// services the rest. This is SCAN, not LOOK: the turnaround is always at
/// the boundary.
///
/// # Algorithm
/// 1. Partition: `left = {r < head}`, `right = {r >= head}`, both ascending.
/// 2. Right: `[head] + right + [disk_size - 1] + reverse(left)`.
/// 3. Left: `[head] + reverse(left) + [0] + right`.
///
/// A request equal to `head` falls in `right` and is visited again right
/// after the head position, contributing a zero-length step.
///
/// An empty request set yields just `[head]`; the head does not move.
#[derive(Debug, Clone, Copy)]
pub struct Scan {
    /// Initial sweep direction.
    pub direction: Direction,
    /// Disk geometry (boundary tracks).
    pub config: DiskConfig,
}

impl Scan {
    /// Creates a SCAN policy on the default disk.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            config: DiskConfig::default(),
        }
    }

    /// Sets the disk geometry.
    pub fn with_config(mut self, config: DiskConfig) -> Self {
        self.config = config;
        self
    }

    fn turnaround(&self) -> Track {
        match self.direction {
            Direction::Left => self.config.min_track(),
            Direction::Right => self.config.max_track(),
        }
    }
}

impl SchedulingPolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, requests: &[Track], head: Track) -> ServiceSequence {
        let mut seq = ServiceSequence::with_capacity(head, requests.len() + 1);
        if requests.is_empty() {
            return seq;
        }

        let (mut left, mut right): (Vec<Track>, Vec<Track>) =
            requests.iter().copied().partition(|&r| r < head);
        left.sort_unstable();
        right.sort_unstable();

        match self.direction {
            Direction::Right => {
                seq.extend(right);
                seq.push(self.turnaround());
                seq.extend(left.into_iter().rev());
            }
            Direction::Left => {
                seq.extend(left.into_iter().rev());
                seq.push(self.turnaround());
                seq.extend(right);
            }
        }

        debug!(
            policy = self.name(),
            direction = %self.direction,
            head,
            requests = requests.len(),
            movement = seq.total_movement(),
            "schedule computed"
        );
        seq
    }

    fn label(&self) -> String {
        format!("SCAN ({})", self.direction)
    }

    fn description(&self) -> &'static str {
        "Elevator sweep to the disk boundary"
    }
}
