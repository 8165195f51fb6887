//! Seedable simulation RNG.
//!
//! Every random draw the engine makes (base volumes, jitter, centrality
//! source sampling) goes through a [`SimRng`] passed in by the caller, so a
//! fixed seed reproduces a run exactly.  The distributions are plain
//! uniforms; only the sequence depends on the generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for synthesis and sampling.
///
/// One per session.  Cloning forks the stream: both copies continue from
/// the same state, which lets a caller draw on a copy and keep it only if
/// the whole operation succeeds.
#[derive(Clone)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose `amount` distinct elements of `slice` (all of them if the slice
    /// is shorter), in random order.
    pub fn sample<T: Copy>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        use rand::seq::SliceRandom;
        slice.choose_multiple(&mut self.0, amount).copied().collect()
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimRng(..)")
    }
}
