//! Error types for allocation.

use thiserror::Error;

/// Errors raised by [`Allocator`](crate::allocation::Allocator).
///
/// Allocation is pure: retrying with the same input reproduces the same
/// error, and no partial partition is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Fixed-count mode was asked for zero teams.
    #[error("requested team count must be positive, got {requested}")]
    InvalidTeamCount { requested: usize },

    /// Capacity-aware mode was given a zero member cap.
    #[error("capacity per team must be positive, got {capacity}")]
    InvalidCapacity { capacity: usize },

    /// The requested number of teams cannot be allocated.
    #[error("cannot allocate {teams} teams")]
    TooManyTeams { teams: usize },

    /// Every team reached its cap while players were still unplaced.
    #[error("{players} players do not fit into {teams} teams of at most {capacity} members")]
    CapacityExceeded {
        players: usize,
        teams: usize,
        capacity: usize,
    },
}

pub type AllocationResult<T> = Result<T, AllocationError>;
