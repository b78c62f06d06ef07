//! Deterministic random number generation with snapshot capture.
//!
//! Two engines consume randomness: TileMerge (tile spawns) and
//! FallingBlock (bag shuffles). Both must replay identically from a seed,
//! and FallingBlock must additionally survive a snapshot/restore cycle
//! without repeating or skipping draws. ChaCha8 gives us both: seeded
//! determinism, and an O(1) resumable position via the stream's word
//! counter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing tile spawns and bag shuffles.
///
/// Same seed, same game. The current position in the stream can be
/// captured with [`GameRng::state`] and resumed with
/// [`GameRng::from_state`], so a restored session continues the exact
/// random sequence the original would have produced.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with the given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Capture the current state for a snapshot.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume from a captured state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position for snapshots.
///
/// The ChaCha8 word position makes capture O(1) regardless of how many
/// values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
