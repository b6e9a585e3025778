//! Teams and partitions.

use crate::player::{Attributes, Rated};

/// A team being built, or a finished one.
///
/// Members are append-only during allocation and the running `sums`
/// always equal the elementwise totals of the members.
///
/// With the `serde` feature, a deserialized team reads only `members` and
/// rebuilds its sums from them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "TeamMembers<T>",
        bound(deserialize = "T: Rated + serde::Deserialize<'de>")
    )
)]
pub struct Team<T> {
    members: Vec<T>,
    sums: Attributes,
}

impl<T> Team<T> {
    pub(crate) fn new() -> Self {
        Self {
            members: Vec::new(),
            sums: Attributes::ZERO,
        }
    }

    /// Members in placement order.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Running attack/defense/intensity totals.
    pub fn sums(&self) -> Attributes {
        self.sums
    }

    /// Sum of the three running totals.
    pub fn load(&self) -> f64 {
        self.sums.total()
    }

    pub fn into_members(self) -> Vec<T> {
        self.members
    }
}

impl<T: Rated> Team<T> {
    pub(crate) fn push(&mut self, member: T) {
        self.sums += member.attributes();
        self.members.push(member);
    }

    /// Totals recomputed from the members, for verification.
    pub fn recompute_sums(&self) -> Attributes {
        self.members.iter().map(Rated::attributes).sum()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TeamMembers<T> {
    members: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Rated> From<TeamMembers<T>> for Team<T> {
    fn from(repr: TeamMembers<T>) -> Self {
        let mut team = Team::new();
        for member in repr.members {
            team.push(member);
        }
        team
    }
}

/// The result of an allocation: one team per resolved slot, in team order.
///
/// Every input entity appears in exactly one team.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: Rated + serde::Deserialize<'de>"
    ))
)]
pub struct Partition<T> {
    teams: Vec<Team<T>>,
}

impl<T> Partition<T> {
    pub(crate) fn new(teams: Vec<Team<T>>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team<T>] {
        &self.teams
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Total number of placed entities.
    pub fn member_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Difference between the highest and lowest team load.
    ///
    /// Returns 0.0 for a partition without teams.
    pub fn load_spread(&self) -> f64 {
        let mut loads = self.teams.iter().map(Team::load);
        let Some(first) = loads.next() else {
            return 0.0;
        };
        let (min, max) = loads.fold((first, first), |(lo, hi), l| (lo.min(l), hi.max(l)));
        max - min
    }

    pub fn into_teams(self) -> Vec<Team<T>> {
        self.teams
    }
}

impl<'a, T> IntoIterator for &'a Partition<T> {
    type Item = &'a Team<T>;
    type IntoIter = std::slice::Iter<'a, Team<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}
