//! Deterministic random number generation for round setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Forkable**: Independent branches for trial rounds
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use numbers_round::core::RoundRng;
//!
//! let mut rng = RoundRng::new(42);
//! let mut other = RoundRng::new(42);
//!
//! assert_eq!(rng.gen_range(100..=999), other.gen_range(100..=999));
//! ```

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG injected into tile generation.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS randomness.
    ///
    /// The seed is still recorded, so the stream can be replayed via `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform integer in an inclusive range.
    pub fn gen_range(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher-Yates, uniform over permutations).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RoundRngState {
        RoundRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RoundRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_repeat_per_seed() {
        let targets = |seed| {
            let mut rng = RoundRng::new(seed);
            (0..50).map(|_| rng.gen_range(100..=999)).collect::<Vec<_>>()
        };

        let first = targets(2024);
        assert!(first.iter().all(|t| (100..=999).contains(t)));
        assert_eq!(first, targets(2024));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = RoundRng::new(1);
        let mut rng2 = RoundRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(0..=999)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(0..=999)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut rng = RoundRng::new(7);
        let mut seen_low = false;
        let mut seen_high = false;

        for _ in 0..500 {
            let v = rng.gen_range(0..=3);
            assert!((0..=3).contains(&v));
            seen_low |= v == 0;
            seen_high |= v == 3;
        }

        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = RoundRng::new(42);
        let mut rng2 = RoundRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), rng1.seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = RoundRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_checkpoint_between_deals() {
        let mut rng = RoundRng::new(11);
        let mut small: Vec<i64> = (1..=10).flat_map(|v| [v, v]).collect();
        rng.shuffle(&mut small);
        rng.gen_range(100..=999);

        let json = serde_json::to_string(&rng.state()).unwrap();
        let checkpoint: RoundRngState = serde_json::from_str(&json).unwrap();

        let deal = |rng: &mut RoundRng| {
            let mut large = vec![25, 50, 75, 100];
            rng.shuffle(&mut large);
            (large, rng.gen_range(100..=999))
        };
        let expected = deal(&mut rng);

        let mut restored = RoundRng::from_state(&checkpoint);
        assert_eq!(restored.seed(), 11);
        assert_eq!(deal(&mut restored), expected);
    }

    #[test]
    fn test_fresh_checkpoint_matches_new() {
        let rng = RoundRng::new(5);
        let state = rng.state();

        assert_eq!(state.word_pos, 0);
        assert_eq!(state.fork_counter, 0);

        let mut a = RoundRng::from_state(&state);
        let mut b = RoundRng::new(5);
        assert_eq!(a.gen_range(1..=10), b.gen_range(1..=10));
    }
}
