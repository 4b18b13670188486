//! Service sequence model.
//!
//! A service sequence is the ordered list of track positions the head
//! visits: the initial head position first, then every serviced request
//! (and, for sweeping policies, the boundary turnaround track).
//!
//! Total head movement is derived from the sequence on demand and never
//! stored separately.

use serde::Serialize;

use super::{DiskConfig, Track};

/// Ordered track positions visited by the disk head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSequence {
    positions: Vec<Track>,
}

impl ServiceSequence {
    /// Starts a sequence at the initial head position.
    pub fn starting_at(head: Track) -> Self {
        Self {
            positions: vec![head],
        }
    }

    /// Starts a sequence with room for `additional` visits after the head.
    pub fn with_capacity(head: Track, additional: usize) -> Self {
        let mut positions = Vec::with_capacity(additional + 1);
        positions.push(head);
        Self { positions }
    }

    /// Appends a visited track.
    pub fn push(&mut self, track: Track) {
        self.positions.push(track);
    }

    /// Initial head position.
    pub fn head(&self) -> Track {
        self.positions[0]
    }

    /// Current (last visited) head position.
    pub fn current(&self) -> Track {
        self.positions[self.positions.len() - 1]
    }

    /// All positions, head first.
    pub fn positions(&self) -> &[Track] {
        &self.positions
    }

    /// Positions visited after the initial head.
    pub fn serviced(&self) -> &[Track] {
        &self.positions[1..]
    }

    /// Number of positions including the initial head.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: a sequence holds at least the head position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sum of absolute distances between consecutive positions.
    ///
    /// Saturates at `u64::MAX` for extreme off-disk positions.
    pub fn total_movement(&self) -> u64 {
        self.positions
            .windows(2)
            .map(|pair| pair[0].abs_diff(pair[1]))
            .fold(0u64, |acc, d| acc.saturating_add(d))
    }

    /// Number of visits to either disk boundary after the initial head.
    pub fn boundary_visits(&self, config: &DiskConfig) -> usize {
        self.serviced()
            .iter()
            .filter(|&&t| t == config.min_track() || t == config.max_track())
            .count()
    }
}

impl Extend<Track> for ServiceSequence {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, iter: I) {
        self.positions.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_sequence() {
        let seq = ServiceSequence::starting_at(50);
        assert_eq!(seq.positions(), &[50]);
        assert_eq!(seq.head(), 50);
        assert_eq!(seq.current(), 50);
        assert!(seq.serviced().is_empty());
        assert_eq!(seq.total_movement(), 0);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_total_movement() {
        let mut seq = ServiceSequence::with_capacity(53, 3);
        seq.extend([98, 37, 37]);
        seq.push(40);
        // 45 + 61 + 0 + 3
        assert_eq!(seq.total_movement(), 109);
        assert_eq!(seq.current(), 40);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_movement_with_negative_head() {
        let mut seq = ServiceSequence::starting_at(-10);
        seq.push(10);
        assert_eq!(seq.total_movement(), 20);
    }

    #[test]
    fn test_movement_saturates_on_extreme_positions() {
        let mut seq = ServiceSequence::starting_at(i64::MIN);
        seq.extend([i64::MAX, i64::MIN, i64::MAX]);
        assert_eq!(seq.total_movement(), u64::MAX);

        let mut seq = ServiceSequence::starting_at(i64::MIN);
        seq.push(i64::MAX);
        assert_eq!(seq.total_movement(), u64::MAX);
    }

    #[test]
    fn test_boundary_visits() {
        let config = DiskConfig::default();
        let mut seq = ServiceSequence::starting_at(0);
        seq.extend([10, 199, 5, 0]);
        assert_eq!(seq.boundary_visits(&config), 2);
    }
}
