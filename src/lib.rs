//! Greedy streaming-balance team formation.
//!
//! Splits a roster of rated players into teams whose aggregate skill is
//! as even as a single greedy pass allows:
//!
//! - **Ranking**: players are ordered by total rating (attack + defense +
//!   intensity), highest first, keeping input order on ties.
//! - **Allocation**: each player in turn joins the team with the lowest
//!   running load, lowest team index on ties. The team count is either
//!   fixed or raised to respect a per-team member cap.
//!
//! Peripheral helpers load rosters from semicolon-delimited text
//! ([`loader`]), summarize and render partitions ([`report`]) and generate
//! random rosters ([`sample`]).
//!
//! # Examples
//!
//! ```
//! use u_roster::{AllocationConfig, Allocator, TeamCountMode};
//! use u_roster::sample::sample_roster;
//!
//! let roster = sample_roster(15, Some(42));
//! let config = AllocationConfig::default()
//!     .with_team_count(3)
//!     .with_mode(TeamCountMode::CapacityAware);
//!
//! let partition = Allocator::allocate(&roster, &config).unwrap();
//! assert_eq!(partition.team_count(), 3);
//! assert_eq!(partition.member_count(), 15);
//! ```

pub mod allocation;
pub mod error;
pub mod loader;
pub mod player;
pub mod ranking;
pub mod report;
pub mod sample;

pub use allocation::{AllocationConfig, Allocator, Partition, Team, TeamCountMode};
pub use error::{AllocationError, AllocationResult};
pub use player::{Attributes, Player, Rated};
pub use ranking::Ranker;
