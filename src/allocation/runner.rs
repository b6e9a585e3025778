//! Greedy streaming-balance allocation.
//!
//! # Algorithm
//!
//! 1. Rank entities by descending rating (stable on ties)
//! 2. Resolve the team count from the configuration
//! 3. For each entity in ranked order:
//!    a. Skip teams already at the member cap (capacity-aware mode only)
//!    b. Pick the remaining team with the strictly lowest load,
//!       lowest index on ties
//!    c. Append the entity and add its attributes to the team sums
//!
//! Always feeding the currently weakest team produces the familiar
//! snake-draft pattern without a separate drafting phase. There is no
//! refinement step afterwards.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::config::AllocationConfig;
use super::types::{Partition, Team};
use crate::error::{AllocationError, AllocationResult};
use crate::player::Rated;
use crate::ranking::Ranker;

/// Deals rated entities into balanced teams.
pub struct Allocator;

impl Allocator {
    /// Ranks `entities` and deals them into the configured number of teams.
    ///
    /// The input is not modified; the partition holds clones.
    ///
    /// # Errors
    ///
    /// - [`AllocationError::InvalidTeamCount`] for zero teams in fixed mode
    /// - [`AllocationError::InvalidCapacity`] for a zero cap in capacity-aware mode
    /// - [`AllocationError::TooManyTeams`] when the resolved teams cannot be allocated
    ///
    /// # Examples
    ///
    /// ```
    /// use u_roster::{AllocationConfig, Allocator, Player};
    ///
    /// let roster = vec![
    ///     Player::new("a", 5.0, 5.0, 5.0),
    ///     Player::new("b", 4.0, 4.0, 4.0),
    ///     Player::new("c", 1.0, 1.0, 1.0),
    /// ];
    /// let config = AllocationConfig::default().with_team_count(2);
    /// let partition = Allocator::allocate(&roster, &config).unwrap();
    ///
    /// assert_eq!(partition.teams()[0].members()[0].name, "a");
    /// assert_eq!(partition.teams()[1].len(), 2);
    /// ```
    pub fn allocate<T: Rated + Clone>(
        entities: &[T],
        config: &AllocationConfig,
    ) -> AllocationResult<Partition<T>> {
        let team_count = config.resolve_team_count(entities.len())?;
        debug!(
            players = entities.len(),
            requested = config.requested_team_count,
            resolved = team_count,
            mode = ?config.mode,
            "resolved team count"
        );

        let ranked = Ranker::rank(entities);
        Self::allocate_sorted(ranked, team_count, config.capacity())
    }

    /// Deals an already-ranked sequence into exactly `team_count` teams.
    ///
    /// No ranking and no team-count resolution happen here; entities are
    /// placed in the order given. With `capacity` set, a team holding that
    /// many members is never chosen again.
    ///
    /// # Errors
    ///
    /// - [`AllocationError::InvalidTeamCount`] for zero teams without a cap
    /// - [`AllocationError::InvalidCapacity`] for `Some(0)`
    /// - [`AllocationError::TooManyTeams`] when the teams cannot be allocated
    /// - [`AllocationError::CapacityExceeded`] when every team is full
    ///   before the sequence is exhausted
    pub fn allocate_sorted<T, I>(
        sorted: I,
        team_count: usize,
        capacity: Option<usize>,
    ) -> AllocationResult<Partition<T>>
    where
        T: Rated,
        I: IntoIterator<Item = T>,
    {
        match capacity {
            None if team_count == 0 => {
                return Err(AllocationError::InvalidTeamCount {
                    requested: team_count,
                })
            }
            Some(0) => return Err(AllocationError::InvalidCapacity { capacity: 0 }),
            _ => {}
        }

        let entities: Vec<T> = sorted.into_iter().collect();
        let players = entities.len();
        let mut teams: Vec<Team<T>> = Vec::new();
        teams
            .try_reserve_exact(team_count)
            .map_err(|_| AllocationError::TooManyTeams { teams: team_count })?;
        teams.extend((0..team_count).map(|_| Team::new()));

        for (position, entity) in entities.into_iter().enumerate() {
            let Some(target) = select_team(&teams, capacity) else {
                return Err(AllocationError::CapacityExceeded {
                    players,
                    teams: team_count,
                    capacity: capacity.unwrap_or(0),
                });
            };

            trace!(
                position,
                rating = entity.rating(),
                team = target,
                load = teams[target].load(),
                "placing entity"
            );
            teams[target].push(entity);
        }

        let partition = Partition::new(teams);
        debug!(
            players,
            teams = partition.team_count(),
            spread = partition.load_spread(),
            "allocation finished"
        );
        Ok(partition)
    }
}

/// Index of the eligible team with the strictly lowest load.
///
/// Scans in team order and only replaces the candidate on a strictly
/// smaller load, so ties resolve to the lowest index.
fn select_team<T>(teams: &[Team<T>], capacity: Option<usize>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, team) in teams.iter().enumerate() {
        if capacity.is_some_and(|cap| team.len() >= cap) {
            continue;
        }

        let load = team.load();
        match best {
            Some((_, best_load)) if load.total_cmp(&best_load) != Ordering::Less => {}
            _ => best = Some((index, load)),
        }
    }

    best.map(|(index, _)| index)
}
