//! Shortest-Seek-Time-First.

use tracing::{debug, trace};

use super::SchedulingPolicy;
use crate::models::{ServiceSequence, Track};

/// Shortest-Seek-Time-First.
///
/// At each step services the remaining request closest to the current head
/// position. Among equidistant candidates the lower track address wins, so
/// results do not depend on input order.
///
/// # Complexity
/// O(n²): the remaining pool is re-scanned every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl Sstf {
    /// Index of the request in `pool` closest to `head`, lower track on ties.
    fn closest(pool: &[Track], head: Track) -> Option<usize> {
        pool.iter()
            .enumerate()
            .min_by_key(|&(_, &track)| (track.abs_diff(head), track))
            .map(|(idx, _)| idx)
    }
}

impl SchedulingPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, requests: &[Track], head: Track) -> ServiceSequence {
        let mut pool = requests.to_vec();
        let mut seq = ServiceSequence::with_capacity(head, requests.len());

        while let Some(idx) = Self::closest(&pool, seq.current()) {
            // Each occurrence of a duplicated track is consumed separately.
            let next = pool.swap_remove(idx);
            trace!(
                from = seq.current(),
                to = next,
                remaining = pool.len(),
                "sstf pick"
            );
            seq.push(next);
        }

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
        "Shortest Seek Time First"
    }
}
