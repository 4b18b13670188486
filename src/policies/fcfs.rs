//! First-Come-First-Served.

use tracing::debug;

use super::SchedulingPolicy;
use crate::models::{ServiceSequence, Track};

/// First-Come-First-Served.
///
/// Services requests strictly in the order supplied. Deliberately does not
/// optimize; the baseline every other policy is measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, requests: &[Track], head: Track) -> ServiceSequence {
        let mut seq = ServiceSequence::with_capacity(head, requests.len());
        seq.extend(requests.iter().copied());
        debug!(
            policy = self.name(),
            head,
            requests = requests.len(),
            movement = seq.total_movement(),
            "schedule computed"
        );
        seq
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}
