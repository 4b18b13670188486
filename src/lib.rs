//! Disk-head scheduling simulation.
//!
//! Given pending track requests and a starting head position, computes the
//! order in which a disk controller services them under a chosen policy
//! and the total head movement that order incurs.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Track`, `DiskConfig`, `Direction`,
//!   `ServiceSequence`
//! - **`policies`**: FCFS, SSTF and SCAN behind the `SchedulingPolicy` trait
//! - **`comparator`**: Runs every policy on one input, reports the minimum
//! - **`input`**: Text parsing for request lists and head positions
//! - **`generator`**: Random test cases (distinct tracks, random head)
//! - **`validation`**: Optional range checks against the disk geometry
//!
//! # Example
//!
//! ```
//! use disk_schedule::comparator::compare;
//! use disk_schedule::models::Direction;
//!
//! let requests = [98, 183, 37, 122, 14, 124, 65, 67];
//! let cmp = compare(&requests, 53, Direction::Right);
//! assert_eq!(cmp.movement_of("FCFS"), Some(640));
//! assert_eq!(cmp.min_movement(), 236);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2
//! - Worthington et al. (1994), "Scheduling Algorithms for Modern Disk Drives"

pub mod comparator;
pub mod error;
pub mod generator;
pub mod input;
pub mod models;
pub mod policies;
pub mod validation;

pub use error::{DiskScheduleError, Result};
