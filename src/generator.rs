//! Random test-case generation.
//!
//! Produces a request set of distinct tracks (sampled without replacement)
//! and a uniformly random head position, for exercising the policies on
//! fresh inputs.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DiskScheduleError, Result};
use crate::models::{DiskConfig, Track};

/// Request count used when the caller asks for zero requests.
pub const DEFAULT_REQUEST_COUNT: usize = 8;

/// A generated scheduling input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Distinct track requests, in generated order.
    pub requests: Vec<Track>,
    /// Initial head position.
    pub head: Track,
}

/// Generates `count` distinct requests and a head position on `config`'s disk.
///
/// A `count` of zero falls back to [`DEFAULT_REQUEST_COUNT`].
///
/// # Errors
/// `TooManyRequests` if `count` exceeds the number of tracks.
pub fn random_test_case<R: Rng>(
    count: usize,
    config: &DiskConfig,
    rng: &mut R,
) -> Result<TestCase> {
    let count = if count == 0 {
        DEFAULT_REQUEST_COUNT
    } else {
        count
    };

    let tracks = usize::try_from(config.disk_size).unwrap_or(0);
    if count > tracks {
        return Err(DiskScheduleError::TooManyRequests {
            requested: count,
            disk_size: config.disk_size,
        });
    }

    let requests: Vec<Track> = index::sample(rng, tracks, count)
        .into_iter()
        .map(|i| i as Track)
        .collect();
    let head = rng.random_range(config.min_track()..=config.max_track());

    debug!(count, head, disk_size = config.disk_size, "generated test case");
    Ok(TestCase { requests, head })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generates_distinct_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = DiskConfig::default();
        let case = random_test_case(20, &config, &mut rng).unwrap();

        assert_eq!(case.requests.len(), 20);
        let unique: HashSet<_> = case.requests.iter().collect();
        assert_eq!(unique.len(), 20);
        assert!(case.requests.iter().all(|&t| config.contains(t)));
        assert!(config.contains(case.head));
    }

    #[test]
    fn test_zero_count_uses_default() {
        let mut rng = SmallRng::seed_from_u64(7);
        let case = random_test_case(0, &DiskConfig::default(), &mut rng).unwrap();
        assert_eq!(case.requests.len(), DEFAULT_REQUEST_COUNT);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let config = DiskConfig::default();
        let a = random_test_case(8, &config, &mut SmallRng::seed_from_u64(1)).unwrap();
        let b = random_test_case(8, &config, &mut SmallRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_whole_disk() {
        let mut rng = SmallRng::seed_from_u64(3);
        let config = DiskConfig::new().with_disk_size(10);
        let case = random_test_case(10, &config, &mut rng).unwrap();
        let mut sorted = case.requests.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<Track>>());
    }

    #[test]
    fn test_too_many_requests() {
        let mut rng = SmallRng::seed_from_u64(0);
        let config = DiskConfig::new().with_disk_size(5);
        let err = random_test_case(6, &config, &mut rng).unwrap_err();
        assert_eq!(
            err,
            DiskScheduleError::TooManyRequests {
                requested: 6,
                disk_size: 5
            }
        );
    }
}
