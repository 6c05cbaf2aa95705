//! Deterministic random number generation for course synthesis.
//!
//! The fallback course generator must produce the same layout for the same
//! seed on every client, so all randomness goes through `CourseRng`
//! (ChaCha8, seeded from a `u64`) rather than a thread-local RNG.
//!
//! ```
//! use golf_scorecard::core::CourseRng;
//!
//! let mut a = CourseRng::new(7).for_context("yardage");
//! let mut b = CourseRng::new(7).for_context("yardage");
//! assert_eq!(a.gen_range(100..=200), b.gen_range(100..=200));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Deterministic RNG with named sub-streams.
#[derive(Clone, Debug)]
pub struct CourseRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CourseRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive an independent stream for a named purpose.
    ///
    /// The derivation is a fixed FNV-1a mix so streams are stable across
    /// platforms and compiler versions.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325 ^ self.seed;
        for byte in context.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Self::new(hash)
    }

    /// Uniform integer in the inclusive range.
    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}
