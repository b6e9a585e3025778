//! Partition summaries and text rendering.
//!
//! Two average figures are offered per team: [`TeamSummary::mean`] divides
//! by the number of members, [`TeamSummary::capacity_normalized`] divides
//! by a fixed capacity regardless of team size. They differ whenever a
//! team is not full; callers pick the one they want to show.

use std::fmt;

use crate::allocation::{Partition, Team};
use crate::player::{Attributes, Rated};

/// Aggregate figures for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    /// Zero-based team index.
    pub index: usize,
    pub member_count: usize,
    pub sums: Attributes,
}

impl TeamSummary {
    pub fn from_team<T>(index: usize, team: &Team<T>) -> Self {
        Self {
            index,
            member_count: team.len(),
            sums: team.sums(),
        }
    }

    pub fn load(&self) -> f64 {
        self.sums.total()
    }

    /// Per-member average. `None` for an empty team.
    pub fn mean(&self) -> Option<Attributes> {
        (self.member_count > 0).then(|| self.sums.scaled_down(self.member_count as f64))
    }

    /// Sums divided by `capacity`, whatever the actual team size.
    /// `None` for a zero capacity.
    pub fn capacity_normalized(&self, capacity: usize) -> Option<Attributes> {
        (capacity > 0).then(|| self.sums.scaled_down(capacity as f64))
    }
}

/// Summary of a whole partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionReport {
    pub teams: Vec<TeamSummary>,
    /// Highest team load minus lowest team load.
    pub load_spread: f64,
}

impl PartitionReport {
    pub fn new<T>(partition: &Partition<T>) -> Self {
        Self {
            teams: partition
                .teams()
                .iter()
                .enumerate()
                .map(|(i, team)| TeamSummary::from_team(i, team))
                .collect(),
            load_spread: partition.load_spread(),
        }
    }
}

/// Text rendering of a partition, one block per team.
///
/// ```text
/// Team 1:
/// Total ratings - Attack: 9, Defense: 8, Intensity: 10
/// Players:
/// Player3: A=5, D=4, I=5
/// ```
pub struct PartitionDisplay<'a, T> {
    partition: &'a Partition<T>,
    averages: Option<usize>,
}

impl<'a, T> PartitionDisplay<'a, T> {
    pub fn new(partition: &'a Partition<T>) -> Self {
        Self {
            partition,
            averages: None,
        }
    }

    /// Also print the per-member mean and the figure normalized by `capacity`.
    pub fn with_averages(mut self, capacity: usize) -> Self {
        self.averages = Some(capacity);
        self
    }
}

impl<T: Rated + fmt::Display> fmt::Display for PartitionDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, team) in self.partition.teams().iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let summary = TeamSummary::from_team(index, team);

            writeln!(f, "Team {}:", index + 1)?;
            writeln!(f, "Total ratings - {}", Labeled(summary.sums))?;

            if let Some(capacity) = self.averages {
                match summary.mean() {
                    Some(mean) => writeln!(f, "Average per member - {}", Labeled(mean))?,
                    None => writeln!(f, "Average per member - n/a")?,
                }
                if let Some(norm) = summary.capacity_normalized(capacity) {
                    writeln!(f, "Average per {capacity} slots - {}", Labeled(norm))?;
                }
            }

            writeln!(f, "Players:")?;
            for member in team.members() {
                writeln!(f, "{member}")?;
            }
        }
        Ok(())
    }
}

struct Labeled(Attributes);

impl fmt::Display for Labeled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Attack: {}, Defense: {}, Intensity: {}",
            round(self.0.attack),
            round(self.0.defense),
            round(self.0.intensity)
        )
    }
}

// Two decimals at most; whole numbers print without a fraction and
// values that round to zero print as `0`, never `-0`.
fn round(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}
