//! Reusable buffers for bootstrap resampling
//!
//! A workspace owns the resample buffer so a sequential bootstrap
//! allocates once instead of once per iteration.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Resampling buffer for one thread of work
#[derive(Debug, Default)]
pub struct BootstrapWorkspace {
    buffer: Vec<f64>,
}

impl BootstrapWorkspace {
    /// Create a workspace sized for samples of length `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Draw `source.len()` values uniformly with replacement
    ///
    /// `source` must be non-empty.
    pub fn resample<R: Rng>(&mut self, source: &[f64], rng: &mut R) -> &[f64] {
        debug_assert!(!source.is_empty(), "cannot resample an empty sample");
        let dist = Uniform::new(0, source.len());

        self.buffer.clear();
        self.buffer
            .extend((0..source.len()).map(|_| source[dist.sample(rng)]));
        &self.buffer
    }
}

/// Seed for the `counter`-th resample derived from a base seed (SplitMix64)
///
/// Lets independent tasks draw reproducible, uncorrelated streams.
#[inline]
pub fn resample_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
