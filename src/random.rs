//! Seeded RNG construction, Fisher-Yates shuffling, and sampling without
//! replacement.
//!
//! Randomness is always passed in by the caller. Nothing here touches a
//! thread-local or global generator, so every routine is reproducible
//! from a seed.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform. For exact, platform-independent sequences in
//! tests, implement [`IndexSource`] directly.

use log::{debug, warn};
use rand::Rng;

use crate::error::{Error, Result};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++ on 64-bit targets).
///
/// # Examples
/// ```
/// use u_evilmath::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Source of uniformly distributed indices.
///
/// Every [`Rng`] is an `IndexSource`. Draws go through `Rng::random_range`,
/// which with rand's `unbiased` feature (enabled in this crate) samples
/// single values by widening multiply with rejection, so indices carry no
/// bias for any `upper`.
pub trait IndexSource {
    /// Returns an index drawn uniformly from `[0, upper]` (inclusive).
    fn index_up_to(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.random_range(0..=upper)
    }
}

/// Sample size validated from loosely typed input.
///
/// This is the way in for sizes that arrive as signed or floating-point
/// values; [`SampleSize::sample`] then behaves exactly like [`sample`].
///
/// # Examples
/// ```
/// use u_evilmath::random::{create_rng, SampleSize};
/// let k = SampleSize::try_from(3_i64).unwrap();
/// let picked = k.sample(&[2, 3, 5, 7, 11], &mut create_rng(1)).unwrap();
/// assert_eq!(picked.len(), 3);
/// assert!(SampleSize::try_from(-3_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleSize(usize);

impl SampleSize {
    pub fn new(k: usize) -> Self {
        Self(k)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Draws this many elements of `population` with [`sample`].
    ///
    /// # Errors
    /// [`Error::InvalidSampleSize`] if the size exceeds `population.len()`.
    pub fn sample<T: Clone, S: IndexSource + ?Sized>(
        self,
        population: &[T],
        source: &mut S,
    ) -> Result<Vec<T>> {
        sample(population, self.0, source)
    }
}

impl From<usize> for SampleSize {
    fn from(k: usize) -> Self {
        Self(k)
    }
}

impl TryFrom<i64> for SampleSize {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidSampleSizeValue {
                reason: format!("{value} is negative or too large"),
            })
    }
}

impl TryFrom<f64> for SampleSize {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(Error::InvalidSampleSizeValue {
                reason: format!("{value} is not an integer"),
            });
        }
        // usize::MAX rounds up to 2^64 as f64, which itself does not fit.
        if value < 0.0 || value >= usize::MAX as f64 {
            return Err(Error::InvalidSampleSizeValue {
                reason: format!("{value} is out of range"),
            });
        }
        Ok(Self(value as usize))
    }
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely.
///
/// # Algorithm
/// Modern variant due to Durstenfeld (1964), popularized by Knuth as
/// "Algorithm P". Iterates backwards, swapping each element with a
/// uniformly chosen earlier (or same) position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use u_evilmath::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle(&mut v, &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, S: IndexSource + ?Sized>(slice: &mut [T], source: &mut S) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    partial_shuffle(slice, n - 1, source);
}

/// Runs the last `k` steps of a Fisher-Yates shuffle in place and returns
/// the tail they settled.
///
/// For `i` from `n − 1` down to `n − k`, swaps position `i` with a
/// uniformly chosen position in `[0, i]`. The returned tail
/// `slice[n − k..]` is a uniform k-subset of the input, itself in
/// uniformly random order. `k` larger than the slice is clamped.
///
/// # Complexity
/// Time: O(k), Space: O(1)
pub fn partial_shuffle<'a, T, S: IndexSource + ?Sized>(
    slice: &'a mut [T],
    k: usize,
    source: &mut S,
) -> &'a mut [T] {
    let n = slice.len();
    let k = k.min(n);
    for i in (n - k..n).rev() {
        let j = source.index_up_to(i);
        debug_assert!(j <= i, "index source returned {j} > {i}");
        slice.swap(i, j);
    }
    &mut slice[n - k..]
}

/// Draws `k` distinct elements of `population` uniformly at random.
///
/// Every k-subset is equally likely, and the returned order is a uniform
/// permutation of the chosen subset; do not rely on it being sorted.
/// `population` is copied, never mutated. Elements are assumed distinct;
/// duplicates in the input are treated as separate positions.
///
/// # Errors
/// [`Error::InvalidSampleSize`] if `k > population.len()`.
///
/// # Complexity
/// Time: O(n) for the copy plus O(k) draws, Space: O(n)
///
/// # Examples
/// ```
/// use u_evilmath::random::{create_rng, sample};
/// let population = [2, 3, 5, 7, 11];
/// let mut rng = create_rng(7);
/// let picked = sample(&population, 3, &mut rng).unwrap();
/// assert_eq!(picked.len(), 3);
/// assert!(picked.iter().all(|p| population.contains(p)));
/// assert!(sample(&population, 6, &mut rng).is_err());
/// ```
pub fn sample<T: Clone, S: IndexSource + ?Sized>(
    population: &[T],
    k: usize,
    source: &mut S,
) -> Result<Vec<T>> {
    if k > population.len() {
        return Err(Error::InvalidSampleSize {
            requested: k,
            available: population.len(),
        });
    }
    let mut work = population.to_vec();
    let picked = partial_shuffle(&mut work, k, source).to_vec();
    debug!("sampled {k} of {} elements", population.len());
    Ok(picked)
}

/// Like [`sample`], but caps `k` at the population size instead of
/// failing.
///
/// The result may hold fewer than `k` elements.
pub fn sample_capped<T: Clone, S: IndexSource + ?Sized>(
    population: &[T],
    k: usize,
    source: &mut S,
) -> Vec<T> {
    let n = population.len();
    if k > n {
        warn!("requested {k} samples from a population of {n}; returning {n}");
    }
    let mut work = population.to_vec();
    let picked = partial_shuffle(&mut work, k, source).to_vec();
    debug!("sampled {} of {n} elements", picked.len());
    picked
}

// ============================================================================
// Tests
// ============================================================================
