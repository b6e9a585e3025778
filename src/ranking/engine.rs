//! Descending stable sort by rating.

use std::cmp::Ordering;

use crate::player::Rated;

/// Orders entities by descending [`Rated::rating`].
///
/// Ratings are computed once per call. Ties keep their relative input
/// order (the sort is stable), and ratings are compared with
/// [`f64::total_cmp`] so every input has a well-defined order.
///
/// # Examples
///
/// ```
/// use u_roster::{Player, Ranker};
///
/// let roster = vec![
///     Player::new("low", 1.0, 1.0, 1.0),
///     Player::new("high", 5.0, 5.0, 5.0),
/// ];
/// let ranked = Ranker::rank(&roster);
/// assert_eq!(ranked[0].name, "high");
/// ```
pub struct Ranker;

impl Ranker {
    /// Returns indices into `items`, highest rating first.
    pub fn rank_indices<T: Rated>(items: &[T]) -> Vec<usize> {
        let ratings: Vec<f64> = items.iter().map(Rated::rating).collect();

        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| descending(ratings[a], ratings[b]));
        indices
    }

    /// Returns references in ranked order.
    pub fn rank_refs<T: Rated>(items: &[T]) -> Vec<&T> {
        Self::rank_indices(items)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }

    /// Returns a ranked copy, leaving `items` untouched.
    pub fn rank<T: Rated + Clone>(items: &[T]) -> Vec<T> {
        Self::rank_indices(items)
            .into_iter()
            .map(|i| items[i].clone())
            .collect()
    }

    /// Whether `items` is already in ranked order.
    pub fn is_ranked<T: Rated>(items: &[T]) -> bool {
        items
            .windows(2)
            .all(|w| descending(w[0].rating(), w[1].rating()) != Ordering::Greater)
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use proptest::prelude::*;

    fn roster() -> Vec<Player> {
        vec![
            Player::new("a", 1.0, 1.0, 1.0),
            Player::new("b", 3.0, 3.0, 3.0),
            Player::new("c", 2.0, 2.0, 2.0),
            Player::new("d", 4.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_descending_order() {
        let ranked = Ranker::rank(&roster());
        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // c and d both rate 6.0; c comes first in the input
        let indices = Ranker::rank_indices(&roster());
        assert_eq!(indices, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_input_untouched() {
        let input = roster();
        let before = input.clone();
        let _ = Ranker::rank(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_empty() {
        let empty: Vec<Player> = vec![];
        assert!(Ranker::rank(&empty).is_empty());
        assert!(Ranker::is_ranked(&empty));
    }

    #[test]
    fn test_negative_ratings() {
        let input = vec![
            Player::new("neg", -2.0, 0.0, 0.0),
            Player::new("zero", 0.0, 0.0, 0.0),
            Player::new("pos", 0.5, 0.0, 0.0),
        ];
        let names: Vec<String> = Ranker::rank(&input).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["pos", "zero", "neg"]);
    }

    #[test]
    fn test_rank_refs_point_into_input() {
        let input = roster();
        let refs = Ranker::rank_refs(&input);
        assert!(std::ptr::eq(refs[0], &input[1]));
    }

    proptest! {
        #[test]
        fn prop_ranked_and_stable(
            values in prop::collection::vec((0u8..4, 0u8..4, 0u8..4), 0..40)
        ) {
            let input: Vec<Player> = values
                .iter()
                .enumerate()
                .map(|(i, &(a, d, s))| Player::new(format!("p{i}"), a as f64, d as f64, s as f64))
                .collect();
            let indices = Ranker::rank_indices(&input);

            let mut seen = indices.clone();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..input.len()).collect::<Vec<_>>());

            for w in indices.windows(2) {
                let (ra, rb) = (input[w[0]].rating(), input[w[1]].rating());
                prop_assert!(ra >= rb);
                if ra == rb {
                    prop_assert!(w[0] < w[1]);
                }
            }
            prop_assert!(Ranker::is_ranked(&Ranker::rank(&input)));
        }
    }
}
