//! Prime enumeration by the Sieve of Eratosthenes.
//!
//! # Algorithm
//!
//! A marking array indexed `0..=limit` starts with every entry "possibly
//! prime" except 0 and 1. Each candidate still marked prime when reached
//! is recorded, and its multiples are struck out starting at `i²`: every
//! smaller multiple `m·i` with `m < i` has a prime factor below `i` and was
//! struck out already.
//!
//! Reference: Knuth (1997), *TAOCP* Vol. 2, §4.5.4, Exercise 8.
//!
//! # Complexity
//!
//! Time: O(n log log n), Space: O(n) for the marking array.

use std::ops::Deref;

use log::debug;

use crate::error::{Error, Result};

/// Largest limit accepted by [`Limit`]. The marking array costs one byte
/// per integer, so this bounds a single sieve at 1 GiB.
pub const MAX_LIMIT: usize = 1 << 30;

/// Validated inclusive upper bound for a sieve.
///
/// This is the way in for bounds that arrive from outside the program:
/// signed or floating-point values, or sizes read from configuration.
/// Construction rejects negative, fractional, non-finite, and oversized
/// bounds; [`Limit::sieve`] then cannot fail.
///
/// # Examples
/// ```
/// use u_evilmath::sieve::Limit;
/// let limit = Limit::try_from(30_i64).unwrap();
/// assert_eq!(limit.sieve().len(), 10);
/// assert!(Limit::try_from(-1_i64).is_err());
/// assert!(Limit::try_from(2.5_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(usize);

impl Limit {
    /// # Errors
    /// [`Error::InvalidLimit`] if `limit > MAX_LIMIT`.
    pub fn new(limit: usize) -> Result<Self> {
        if limit > MAX_LIMIT {
            return Err(Error::InvalidLimit {
                reason: format!("{limit} exceeds the maximum of {MAX_LIMIT}"),
            });
        }
        Ok(Self(limit))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Runs [`sieve`] up to this limit.
    pub fn sieve(self) -> PrimeSet {
        sieve(self.0)
    }
}

impl TryFrom<usize> for Limit {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Limit {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::InvalidLimit {
                reason: format!("{value} is negative"),
            });
        }
        let value = usize::try_from(value).map_err(|_| Error::InvalidLimit {
            reason: format!("{value} does not fit in usize"),
        })?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Limit {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidLimit {
                reason: format!("{value} is not finite"),
            });
        }
        if value.fract() != 0.0 {
            return Err(Error::InvalidLimit {
                reason: format!("{value} is not an integer"),
            });
        }
        if value < 0.0 {
            return Err(Error::InvalidLimit {
                reason: format!("{value} is negative"),
            });
        }
        // usize::MAX rounds up to 2^64 as f64, which itself does not fit.
        if value >= usize::MAX as f64 {
            return Err(Error::InvalidLimit {
                reason: format!("{value} does not fit in usize"),
            });
        }
        Self::new(value as usize)
    }
}

/// Ascending sequence of every prime up to an inclusive limit.
///
/// Only [`sieve`] constructs one, so the contents are always exactly the
/// primes `<= limit()`, strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimeSet {
    primes: Vec<u64>,
    limit: usize,
}

impl PrimeSet {
    /// The limit this set was sieved up to.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of primes in the set.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Returns `true` if the limit was below 2.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.primes.iter()
    }

    /// Membership test by binary search.
    ///
    /// # Complexity
    /// O(log n)
    pub fn contains(&self, value: u64) -> bool {
        self.primes.binary_search(&value).is_ok()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.primes
    }
}

impl Deref for PrimeSet {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.primes
    }
}

impl AsRef<[u64]> for PrimeSet {
    fn as_ref(&self) -> &[u64] {
        &self.primes
    }
}

impl From<PrimeSet> for Vec<u64> {
    fn from(set: PrimeSet) -> Self {
        set.primes
    }
}

impl IntoIterator for PrimeSet {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.into_iter()
    }
}

impl<'a> IntoIterator for &'a PrimeSet {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}

/// Computes every prime `<= limit` in ascending order.
///
/// Limits 0 and 1 produce an empty set. The result depends only on
/// `limit`. For bounds that have not been checked, go through [`Limit`].
///
/// # Panics
/// If the marking array for `limit` cannot be allocated; `usize::MAX`
/// always panics with a capacity overflow.
///
/// # Complexity
/// Time: O(n log log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_evilmath::sieve::sieve;
/// assert_eq!(sieve(30).as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
/// assert!(sieve(1).is_empty());
/// ```
pub fn sieve(limit: usize) -> PrimeSet {
    let mut primes = Vec::new();
    if limit >= 2 {
        let mut is_prime = vec![true; limit.saturating_add(1)];
        is_prime[0] = false;
        is_prime[1] = false;

        for i in 2..=limit {
            if !is_prime[i] {
                continue;
            }
            primes.push(i as u64);
            // None once i² overflows, and then i² > limit anyway.
            if let Some(start) = i.checked_mul(i) {
                for multiple in (start..=limit).step_by(i) {
                    is_prime[multiple] = false;
                }
            }
        }
    }

    debug!("sieved {} primes up to {limit}", primes.len());
    PrimeSet { primes, limit }
}

/// Trial-division primality test.
///
/// Slower than [`sieve`] for enumerating ranges, but needs no buffer.
///
/// # Complexity
/// O(√n)
///
/// # Examples
/// ```
/// use u_evilmath::sieve::is_prime;
/// assert!(is_prime(97));
/// assert!(!is_prime(91)); // 7 × 13
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_boundaries() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
        assert_eq!(sieve(2).as_slice(), &[2]);
        assert_eq!(sieve(3).as_slice(), &[2, 3]);
        assert_eq!(sieve(4).as_slice(), &[2, 3]);
        assert_eq!(sieve(10).as_slice(), &[2, 3, 5, 7]);
    }

    #[test]
    fn test_sieve_thirty() {
        assert_eq!(
            sieve(30).into_vec(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_sieve_limit_is_prime() {
        // Inclusive bound: 29 itself must appear.
        assert_eq!(sieve(29).last(), Some(&29));
        assert_eq!(sieve(28).last(), Some(&23));
    }

    #[test]
    fn test_sieve_prime_counts() {
        // π(n) for powers of ten.
        assert_eq!(sieve(100).len(), 25);
        assert_eq!(sieve(1_000).len(), 168);
        assert_eq!(sieve(10_000).len(), 1229);
        assert_eq!(sieve(100_000).len(), 9592);
    }

    #[test]
    fn test_sieve_squares_of_primes_excluded() {
        let primes = sieve(1_000);
        for p in [4, 9, 25, 49, 121, 169, 289, 361, 529, 841, 961] {
            assert!(!primes.contains(p), "{p} is a prime square");
        }
    }

    #[test]
    fn test_sieve_deterministic() {
        assert_eq!(sieve(5_000), sieve(5_000));
    }

    #[test]
    fn test_prime_set_accessors() {
        let primes = sieve(20);
        assert_eq!(primes.limit(), 20);
        assert_eq!(primes.len(), 8);
        assert!(primes.contains(19));
        assert!(!primes.contains(20));
        assert_eq!(primes.iter().sum::<u64>(), 77);
        assert_eq!((&primes).into_iter().count(), 8);
        let v: Vec<u64> = primes.into();
        assert_eq!(v, vec![2, 3, 5, 7, 11, 13, 17, 19]);
    }

    #[test]
    fn test_is_prime_small() {
        let expected = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        let found: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_is_prime_large() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(is_prime(u64::from(u32::MAX) - 4)); // 4294967291
    }

    #[test]
    fn test_limit_try_from_i64() {
        assert_eq!(Limit::try_from(0_i64).unwrap().get(), 0);
        assert_eq!(Limit::try_from(1_000_i64).unwrap(), Limit::new(1_000).unwrap());
        assert!(matches!(
            Limit::try_from(-5_i64),
            Err(Error::InvalidLimit { .. })
        ));
    }

    #[test]
    fn test_limit_try_from_f64() {
        assert_eq!(Limit::try_from(100.0_f64).unwrap().get(), 100);
        assert!(Limit::try_from(-1.0_f64).is_err());
        assert!(Limit::try_from(0.5_f64).is_err());
        assert!(Limit::try_from(f64::NAN).is_err());
        assert!(Limit::try_from(f64::INFINITY).is_err());
        assert!(matches!(
            Limit::try_from(18446744073709551616.0_f64),
            Err(Error::InvalidLimit { .. })
        ));
    }

    #[test]
    fn test_limit_max() {
        assert_eq!(Limit::new(MAX_LIMIT).unwrap().get(), MAX_LIMIT);
        assert!(matches!(
            Limit::new(MAX_LIMIT + 1),
            Err(Error::InvalidLimit { .. })
        ));
        assert!(Limit::try_from(usize::MAX).is_err());
        assert!(Limit::try_from(i64::MAX).is_err());
        assert!(Limit::try_from((MAX_LIMIT + 1) as f64).is_err());
    }

    #[test]
    fn test_limit_sieve() {
        let limit = Limit::try_from(30.0_f64).unwrap();
        assert_eq!(limit.sieve(), sieve(30));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_sieve_unallocatable_limit_panics() {
        let _ = sieve(usize::MAX);
    }
}
