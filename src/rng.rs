//! Randomness injected into board generation.

use rand::Rng;

/// Source of uniform draws used by the generator.
///
/// Every [`rand::Rng`] is a `RandomSource`, so callers normally pass a
/// seeded `SmallRng`. Tests can implement the trait directly to script the
/// exact sequence of draws.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
