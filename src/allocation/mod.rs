//! Team allocation.
//!
//! Deals a ranked roster into teams one entity at a time, always feeding
//! the team with the lowest running attack+defense+intensity load.
//! Two team-count policies are available:
//!
//! - **Fixed**: exactly the requested number of teams, no member cap.
//! - **Capacity-aware**: at least the requested number of teams, raised
//!   as needed so no team holds more than the member cap.
//!
//! The pass is deterministic and side-effect free: the same roster and
//! configuration always yield the same partition.

mod config;
mod runner;
mod types;

pub use config::{AllocationConfig, TeamCountMode, DEFAULT_CAPACITY};
pub use runner::Allocator;
pub use types::{Partition, Team};
