//! Deterministic simulation-level RNG.
//!
//! # Determinism strategy
//!
//! The whole airspace draws from one `SmallRng` stream owned by the
//! simulation root.  Every consumer (speed noise, spawn intervals, destination
//! choice, spawn headings) draws in a fixed order within a tick — aircraft in
//! registry order, then vertiports in layout order — so the same seed and the
//! same action sequence reproduce an episode bit-for-bit.
//!
//! The tick is strictly single-threaded, so there is no per-entity RNG and no
//! seed mixing; `reseed` rewinds the stream at episode reset.

use rand::distributions::Distribution;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-wide RNG.  Not `Sync`; lives inside the simulation root.
pub struct SimRng {
    inner: SmallRng,
    seed:  u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: SmallRng::seed_from_u64(seed), seed }
    }

    /// Restart the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = SmallRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Seed the stream was last (re)started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Expose the inner `SmallRng` for use with `rand` APIs directly.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.inner
    }

    /// Draw one value from `dist` (e.g. a `rand_distr::Normal`).
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.inner)
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimRng").field("seed", &self.seed).finish_non_exhaustive()
    }
}
