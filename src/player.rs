//! Rated entities.

use std::fmt;
use std::ops::{Add, AddAssign};

/// The three independent skill attributes of a player, or their running
/// totals over a team.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub attack: f64,
    pub defense: f64,
    pub intensity: f64,
}

impl Attributes {
    pub const ZERO: Attributes = Attributes {
        attack: 0.0,
        defense: 0.0,
        intensity: 0.0,
    };

    pub fn new(attack: f64, defense: f64, intensity: f64) -> Self {
        Self {
            attack,
            defense,
            intensity,
        }
    }

    /// Sum of the three components.
    pub fn total(&self) -> f64 {
        self.attack + self.defense + self.intensity
    }

    /// Divides every component by `divisor`.
    pub fn scaled_down(&self, divisor: f64) -> Attributes {
        Attributes {
            attack: self.attack / divisor,
            defense: self.defense / divisor,
            intensity: self.intensity / divisor,
        }
    }
}

impl Add for Attributes {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Attributes {
            attack: self.attack + rhs.attack,
            defense: self.defense + rhs.defense,
            intensity: self.intensity + rhs.intensity,
        }
    }
}

impl AddAssign for Attributes {
    fn add_assign(&mut self, rhs: Self) {
        self.attack += rhs.attack;
        self.defense += rhs.defense;
        self.intensity += rhs.intensity;
    }
}

impl std::iter::Sum for Attributes {
    fn sum<I: Iterator<Item = Attributes>>(iter: I) -> Self {
        iter.fold(Attributes::ZERO, Add::add)
    }
}

/// Anything that can be ranked and placed on a team.
///
/// Ranking and allocation only look at the attribute triple, so callers
/// may allocate their own record types without converting to [`Player`].
///
/// # Examples
///
/// ```
/// use u_roster::{Attributes, Rated};
///
/// struct Recruit { skills: [f64; 3] }
///
/// impl Rated for Recruit {
///     fn attributes(&self) -> Attributes {
///         Attributes::new(self.skills[0], self.skills[1], self.skills[2])
///     }
/// }
///
/// let r = Recruit { skills: [1.0, 2.0, 3.5] };
/// assert_eq!(r.rating(), 6.5);
/// ```
pub trait Rated {
    /// The attack/defense/intensity triple.
    fn attributes(&self) -> Attributes;

    /// Scalar rating used for the initial sort order.
    fn rating(&self) -> f64 {
        self.attributes().total()
    }
}

/// A named, rated player. Names are labels only and may repeat.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub attack: f64,
    pub defense: f64,
    pub intensity: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, attack: f64, defense: f64, intensity: f64) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            intensity,
        }
    }
}

impl Rated for Player {
    fn attributes(&self) -> Attributes {
        Attributes::new(self.attack, self.defense, self.intensity)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: A={}, D={}, I={}",
            self.name, self.attack, self.defense, self.intensity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_attribute_total() {
        let p = Player::new("Ada", 3.0, 4.5, 1.0);
        assert!((p.rating() - 8.5).abs() < 1e-10);
    }

    #[test]
    fn test_attributes_sum() {
        let total: Attributes = [
            Attributes::new(1.0, 2.0, 3.0),
            Attributes::new(4.0, 5.0, 6.0),
            Attributes::new(-1.0, 0.0, 0.5),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Attributes::new(4.0, 7.0, 9.5));
    }

    #[test]
    fn test_scaled_down() {
        let a = Attributes::new(10.0, 5.0, 0.0).scaled_down(5.0);
        assert_eq!(a, Attributes::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_display_matches_roster_listing() {
        let p = Player::new("Player3", 5.0, 4.0, 2.5);
        assert_eq!(p.to_string(), "Player3: A=5, D=4, I=2.5");
    }
}
