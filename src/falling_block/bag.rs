//! Bag-of-7 piece randomizer.
//!
//! The bag holds each of the seven shapes exactly once; draws take from
//! a shuffled order until the bag is empty, then it is refilled and
//! reshuffled. Across any window aligned to a refill boundary every
//! shape appears exactly once, so no shape can repeat more than twice
//! in a row.

use serde::{Deserialize, Serialize};

use super::pieces::Shape;
use crate::core::GameRng;

/// The randomizer state: the shapes not yet drawn from the current fill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceBag {
    remaining: Vec<Shape>,
}

impl PieceBag {
    /// Create a freshly filled, shuffled bag.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut remaining = Shape::ALL.to_vec();
        rng.shuffle(&mut remaining);
        Self { remaining }
    }

    /// Rebuild a bag from snapshot contents.
    ///
    /// Returns `None` if a shape appears more than once.
    #[must_use]
    pub fn from_remaining(remaining: Vec<Shape>) -> Option<Self> {
        let mut seen = [false; 7];
        for &shape in &remaining {
            if seen[shape.index()] {
                return None;
            }
            seen[shape.index()] = true;
        }
        Some(Self { remaining })
    }

    /// Draw the next shape, refilling and reshuffling an empty bag.
    pub fn draw(&mut self, rng: &mut GameRng) -> Shape {
        if self.remaining.is_empty() {
            self.remaining.extend_from_slice(&Shape::ALL);
            rng.shuffle(&mut self.remaining);
        }
        // Non-empty: just refilled if it was exhausted.
        self.remaining.pop().expect("bag refilled before draw")
    }

    /// Shapes left in the current fill, in draw order (last drawn first).
    #[must_use]
    pub fn remaining(&self) -> &[Shape] {
        &self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seven_draws_cover_all_shapes() {
        let mut rng = GameRng::new(42);
        let mut bag = PieceBag::new(&mut rng);

        let mut drawn: Vec<_> = (0..7).map(|_| bag.draw(&mut rng)).collect();
        drawn.sort_unstable_by_key(|s| s.index());

        let mut expected = Shape::ALL.to_vec();
        expected.sort_unstable_by_key(|s| s.index());
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_refill_cycle_is_a_permutation() {
        let mut rng = GameRng::new(7);
        let mut bag = PieceBag::new(&mut rng);

        // Drain the first fill, then check the next full cycle.
        for _ in 0..7 {
            bag.draw(&mut rng);
        }
        assert!(bag.remaining().is_empty());

        let mut cycle: Vec<_> = (0..7).map(|_| bag.draw(&mut rng)).collect();
        cycle.sort_unstable_by_key(|s| s.index());
        let mut expected = Shape::ALL.to_vec();
        expected.sort_unstable_by_key(|s| s.index());
        assert_eq!(cycle, expected);
    }

    #[test]
    fn test_no_shape_three_times_in_a_row() {
        let mut rng = GameRng::new(3);
        let mut bag = PieceBag::new(&mut rng);

        let draws: Vec<_> = (0..70).map(|_| bag.draw(&mut rng)).collect();
        for window in draws.windows(3) {
            assert!(!(window[0] == window[1] && window[1] == window[2]));
        }
    }

    #[test]
    fn test_from_remaining_rejects_duplicates() {
        assert!(PieceBag::from_remaining(vec![Shape::I, Shape::I]).is_none());
        assert!(PieceBag::from_remaining(vec![Shape::I, Shape::O]).is_some());
        assert!(PieceBag::from_remaining(vec![]).is_some());
    }

    #[test]
    fn test_deterministic_draws() {
        let mut rng1 = GameRng::new(11);
        let mut rng2 = GameRng::new(11);
        let mut bag1 = PieceBag::new(&mut rng1);
        let mut bag2 = PieceBag::new(&mut rng2);

        for _ in 0..21 {
            assert_eq!(bag1.draw(&mut rng1), bag2.draw(&mut rng2));
        }
    }
}
