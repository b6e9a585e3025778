//! Allocation configuration and team-count resolution.

use crate::error::{AllocationError, AllocationResult};

/// Default member cap used by [`TeamCountMode::CapacityAware`].
pub const DEFAULT_CAPACITY: usize = 5;

/// How the requested team count turns into the number of teams built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TeamCountMode {
    /// Exactly the requested number of teams, with no member cap.
    /// Teams may end up uneven in size.
    #[default]
    Fixed,

    /// At least the requested number of teams, raised to
    /// `ceil(players / capacity)` when needed so no team exceeds the cap.
    /// A team at the cap never receives another player.
    CapacityAware,
}

/// Configuration for a single allocation run.
///
/// # Examples
///
/// ```
/// use u_roster::{AllocationConfig, TeamCountMode};
///
/// let config = AllocationConfig::default()
///     .with_team_count(3)
///     .with_mode(TeamCountMode::CapacityAware)
///     .with_capacity(5);
///
/// assert_eq!(config.resolve_team_count(15).unwrap(), 3);
/// assert_eq!(config.resolve_team_count(16).unwrap(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationConfig {
    /// Number of teams asked for. In capacity-aware mode this is a minimum.
    pub requested_team_count: usize,

    /// Team-count resolution policy.
    pub mode: TeamCountMode,

    /// Member cap per team. Only consulted in capacity-aware mode.
    pub capacity_per_team: usize,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            requested_team_count: 3,
            mode: TeamCountMode::default(),
            capacity_per_team: DEFAULT_CAPACITY,
        }
    }
}

impl AllocationConfig {
    /// Sets the requested team count.
    pub fn with_team_count(mut self, n: usize) -> Self {
        self.requested_team_count = n;
        self
    }

    /// Sets the team-count resolution policy.
    pub fn with_mode(mut self, mode: TeamCountMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the member cap per team (capacity-aware mode only).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity_per_team = capacity;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AllocationResult<()> {
        match self.mode {
            TeamCountMode::Fixed => {
                if self.requested_team_count == 0 {
                    return Err(AllocationError::InvalidTeamCount {
                        requested: self.requested_team_count,
                    });
                }
            }
            TeamCountMode::CapacityAware => {
                if self.capacity_per_team == 0 {
                    return Err(AllocationError::InvalidCapacity {
                        capacity: self.capacity_per_team,
                    });
                }
            }
        }
        Ok(())
    }

    /// Member cap enforced during placement, if any.
    pub fn capacity(&self) -> Option<usize> {
        match self.mode {
            TeamCountMode::Fixed => None,
            TeamCountMode::CapacityAware => Some(self.capacity_per_team),
        }
    }

    /// Number of teams a roster of `total_players` is dealt into.
    pub fn resolve_team_count(&self, total_players: usize) -> AllocationResult<usize> {
        self.validate()?;
        Ok(match self.mode {
            TeamCountMode::Fixed => self.requested_team_count,
            TeamCountMode::CapacityAware => {
                let needed = total_players.div_ceil(self.capacity_per_team);
                self.requested_team_count.max(needed)
            }
        })
    }
}
