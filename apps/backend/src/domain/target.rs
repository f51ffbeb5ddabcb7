//! Target number sources.
//!
//! A [`TargetSource`] picks the secret number for a new game. The store owns
//! one boxed source, so production can draw from OS entropy while tests pin
//! the sequence with a seed or a fixed value.

use std::ops::RangeInclusive;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Picks a target number from an inclusive range.
///
/// Implementations must return a value inside `range` whenever the range is
/// non-empty. For an empty range (`start > end`) they must not panic and
/// return `*range.start()`.
pub trait TargetSource: Send + Sync {
    fn pick(&self, range: RangeInclusive<i32>) -> i32;
}

/// Uniform random source backed by ChaCha8.
///
/// Wrapped in a `Mutex` because `pick` takes `&self` while the RNG needs
/// mutable access.
pub struct RandomTarget {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomTarget {
    /// Create a source with optional seed.
    ///
    /// - `Some(seed)` gives a reproducible sequence (tests, demos)
    /// - `None` seeds from the operating system
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl TargetSource for RandomTarget {
    fn pick(&self, range: RangeInclusive<i32>) -> i32 {
        if range.is_empty() {
            return *range.start();
        }
        self.rng.lock().random_range(range)
    }
}

/// Always returns the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedTarget(pub i32);

impl TargetSource for FixedTarget {
    fn pick(&self, range: RangeInclusive<i32>) -> i32 {
        if range.is_empty() {
            return *range.start();
        }
        self.0.clamp(*range.start(), *range.end())
    }
}
