//! Random sample rosters for demos and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::player::Player;

/// Lowest sampled attribute value.
pub const MIN_SKILL: u32 = 1;
/// Highest sampled attribute value.
pub const MAX_SKILL: u32 = 5;

/// Generates `count` players named `Player1..PlayerN` with integer
/// attributes drawn uniformly from `MIN_SKILL..=MAX_SKILL`.
///
/// The same seed always yields the same roster; `None` draws a fresh seed.
///
/// # Examples
///
/// ```
/// use u_roster::sample::sample_roster;
///
/// let a = sample_roster(15, Some(7));
/// let b = sample_roster(15, Some(7));
/// assert_eq!(a, b);
/// assert_eq!(a[0].name, "Player1");
/// ```
pub fn sample_roster(count: usize, seed: Option<u64>) -> Vec<Player> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(rand::random()),
    };
    sample_roster_with(count, &mut rng)
}

/// Like [`sample_roster`], drawing from a caller-supplied generator.
pub fn sample_roster_with<R: Rng>(count: usize, rng: &mut R) -> Vec<Player> {
    (1..=count)
        .map(|i| {
            Player::new(
                format!("Player{i}"),
                skill(rng),
                skill(rng),
                skill(rng),
            )
        })
        .collect()
}

fn skill<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(MIN_SKILL..=MAX_SKILL) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_names() {
        let roster = sample_roster(15, Some(42));
        assert_eq!(roster.len(), 15);
        assert_eq!(roster[14].name, "Player15");
    }

    #[test]
    fn test_values_in_range() {
        let roster = sample_roster(200, Some(1));
        for p in &roster {
            for v in [p.attack, p.defense, p.intensity] {
                assert!(v >= MIN_SKILL as f64 && v <= MAX_SKILL as f64);
                assert_eq!(v.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_seed_reproducible() {
        assert_eq!(sample_roster(30, Some(9)), sample_roster(30, Some(9)));
    }

    #[test]
    fn test_empty() {
        assert!(sample_roster(0, None).is_empty());
    }
}
