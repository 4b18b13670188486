//! Policy comparison.
//!
//! Runs FCFS, SSTF and SCAN over the identical request set and head
//! position and reports each policy's total head movement along with the
//! minimum across the three.
//!
//! # Output
//!
//! | Column | Definition |
//! |--------|-----------|
//! | Algorithm | Policy label (`FCFS`, `SSTF`, `SCAN (Right)`) |
//! | Total Head Movement | Sum of seek distances of that policy's sequence |
//!
//! Ties on the minimum are not resolved by name: [`Comparison::best`]
//! returns the first policy, in FCFS/SSTF/SCAN order, that reaches it.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{Direction, DiskConfig, ServiceSequence, Track};
use crate::policies::{Fcfs, Scan, SchedulingPolicy, Sstf};

/// One policy's result within a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyMovement {
    /// Policy label.
    pub name: String,
    /// Total head movement.
    pub movement: u64,
    /// Service order the movement was computed from.
    pub sequence: ServiceSequence,
}

/// Results of running every policy over the same input.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Per-policy results, in FCFS, SSTF, SCAN order.
    pub results: Vec<PolicyMovement>,
}

impl Comparison {
    /// Runs all policies, SCAN sweeping toward `direction` on `config`'s disk.
    pub fn run(requests: &[Track], head: Track, direction: Direction, config: DiskConfig) -> Self {
        let scan = Scan::new(direction).with_config(config);
        let policies: [&dyn SchedulingPolicy; 3] = [&Fcfs, &Sstf, &scan];

        let results = policies
            .iter()
            .map(|policy| {
                let sequence = policy.schedule(requests, head);
                PolicyMovement {
                    name: policy.label(),
                    movement: sequence.total_movement(),
                    sequence,
                }
            })
            .collect();

        let comparison = Self { results };
        if let Some(best) = comparison.best() {
            debug!(
                best = %best.name,
                movement = best.movement,
                requests = requests.len(),
                "comparison complete"
            );
        }
        comparison
    }

    /// Minimum total movement across all policies.
    pub fn min_movement(&self) -> u64 {
        self.results.iter().map(|r| r.movement).min().unwrap_or(0)
    }

    /// First policy achieving the minimum movement.
    pub fn best(&self) -> Option<&PolicyMovement> {
        self.results.iter().min_by_key(|r| r.movement)
    }

    /// Movement of the policy with the given label.
    pub fn movement_of(&self, name: &str) -> Option<u64> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.movement)
    }

    /// Labels of every policy tied at the minimum.
    pub fn winners(&self) -> Vec<&str> {
        let min = self.min_movement();
        self.results
            .iter()
            .filter(|r| r.movement == min)
            .map(|r| r.name.as_str())
            .collect()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .results
            .iter()
            .map(|r| r.name.len())
            .max()
            .unwrap_or(0)
            .max("Algorithm".len())
            + 3;

        writeln!(f, "{:<width$}Total Head Movement", "Algorithm")?;
        for r in &self.results {
            writeln!(f, "{:<width$}{}", r.name, r.movement)?;
        }
        write!(f, "Best Algorithm → {} Head Movements", self.min_movement())
    }
}

/// Compares all policies on the default disk.
pub fn compare(requests: &[Track], head: Track, direction: Direction) -> Comparison {
    Comparison::run(requests, head, direction, DiskConfig::default())
}

/// Compares all policies on a disk of the given geometry.
pub fn compare_with_config(
    requests: &[Track],
    head: Track,
    direction: Direction,
    config: DiskConfig,
) -> Comparison {
    Comparison::run(requests, head, direction, config)
}

/// Like [`compare`], with the SCAN direction given as text.
pub fn compare_named(requests: &[Track], head: Track, direction: &str) -> Result<Comparison> {
    Ok(compare(requests, head, direction.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiskScheduleError;
    use crate::policies;

    const REQUESTS: [Track; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn test_compare_reference() {
        let cmp = compare(&REQUESTS, 53, Direction::Right);
        assert_eq!(cmp.results.len(), 3);
        assert_eq!(cmp.movement_of("FCFS"), Some(640));
        assert_eq!(cmp.movement_of("SSTF"), Some(236));
        assert_eq!(cmp.movement_of("SCAN (Right)"), Some(331));
        assert_eq!(cmp.min_movement(), 236);
        assert_eq!(cmp.best().unwrap().name, "SSTF");
    }

    #[test]
    fn test_min_matches_policies() {
        let requests = [12, 180, 95, 3, 150, 77];
        for head in [0, 60, 199] {
            for direction in [Direction::Left, Direction::Right] {
                let cmp = compare(&requests, head, direction);
                let expected = [
                    policies::fcfs(&requests, head).total_movement(),
                    policies::sstf(&requests, head).total_movement(),
                    policies::scan(&requests, head, direction).total_movement(),
                ]
                .into_iter()
                .min()
                .unwrap();
                assert_eq!(cmp.min_movement(), expected);
            }
        }
    }

    #[test]
    fn test_compare_ties() {
        let cmp = compare(&REQUESTS, 53, Direction::Left);
        // SSTF and SCAN (Left) both move 236.
        assert_eq!(cmp.min_movement(), 236);
        assert_eq!(cmp.winners(), ["SSTF", "SCAN (Left)"]);
        assert_eq!(cmp.best().unwrap().name, "SSTF");
    }

    #[test]
    fn test_compare_empty() {
        let cmp = compare(&[], 50, Direction::Right);
        assert_eq!(cmp.min_movement(), 0);
        for r in &cmp.results {
            assert_eq!(r.sequence.positions(), &[50]);
            assert_eq!(r.movement, 0);
        }
    }

    #[test]
    fn test_compare_named_invalid() {
        let err = compare_named(&REQUESTS, 53, "Up").unwrap_err();
        assert_eq!(err, DiskScheduleError::InvalidDirection("Up".into()));
        assert!(compare_named(&REQUESTS, 53, "Left").is_ok());
    }

    #[test]
    fn test_compare_with_config() {
        let config = DiskConfig::new().with_disk_size(100);
        let cmp = compare_with_config(&[60, 10], 50, Direction::Right, config);
        assert_eq!(cmp.results[2].sequence.positions(), &[50, 60, 99, 10]);
    }

    #[test]
    fn test_display_table() {
        let table = compare(&REQUESTS, 53, Direction::Right).to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Algorithm      Total Head Movement");
        assert_eq!(lines[1], "FCFS           640");
        assert_eq!(lines[2], "SSTF           236");
        assert_eq!(lines[3], "SCAN (Right)   331");
        assert_eq!(lines[4], "Best Algorithm → 236 Head Movements");
    }

    #[test]
    fn test_serialize() {
        let cmp = compare(&[60], 50, Direction::Right);
        let json = serde_json::to_value(&cmp).unwrap();
        assert_eq!(json["results"][0]["name"], "FCFS");
        assert_eq!(json["results"][0]["movement"], 10);
        assert_eq!(json["results"][0]["sequence"]["positions"][1], 60);
    }
}
