//! Random sources used to lay out the board.
//!
//! Board generation takes a `&mut dyn RandomSource` so servers can draw from
//! OS entropy while tests pin a seed and assert exact layouts.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Source of shuffles for board generation.
pub trait RandomSource {
    /// Applies a uniform random permutation to `labels` in place.
    fn shuffle(&mut self, labels: &mut [u32]);
}

/// Deterministic ChaCha8-backed random source.
///
/// The same seed always yields the same sequence of shuffles.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Creates a random source from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a random source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a seeded source when a seed is given, otherwise an entropy one.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }
}

impl RandomSource for SeededRng {
    fn shuffle(&mut self, labels: &mut [u32]) {
        labels.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_permutation() {
        let mut a: Vec<u32> = (1..=16).collect();
        let mut b = a.clone();
        SeededRng::new(7).shuffle(&mut a);
        SeededRng::new(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut labels: Vec<u32> = (1..=8).chain(1..=8).collect();
        SeededRng::new(3).shuffle(&mut labels);
        labels.sort_unstable();
        let expected: Vec<u32> = (1..=8).flat_map(|v| [v, v]).collect();
        assert_eq!(labels, expected);
    }
}
