//! Pool of plausible-looking answers: a random sample of small primes.
//!
//! [`possible_answers`] sieves up to [`PoolOptions::limit`] and samples
//! [`PoolOptions::count`] primes from the result. Options can be loaded
//! from TOML:
//!
//! ```toml
//! limit = 1000
//! count = 100
//! policy = "strict"
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::random::{sample_capped, SampleSize};
use crate::sieve::Limit;

/// What to do when more answers are requested than there are primes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSizePolicy {
    /// Fail with [`Error::InvalidSampleSize`].
    #[default]
    Strict,
    /// Return every prime, shuffled, even if that is fewer than requested.
    Capped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolOptions {
    #[serde(default = "PoolOptions::default_limit")]
    pub limit: usize,
    #[serde(default = "PoolOptions::default_count")]
    pub count: usize,
    #[serde(default)]
    pub policy: SampleSizePolicy,
}

impl PoolOptions {
    fn default_limit() -> usize {
        1000
    }

    fn default_count() -> usize {
        100
    }

    /// Parses options from a TOML document and validates them.
    ///
    /// # Examples
    /// ```
    /// use u_evilmath::answers::PoolOptions;
    /// let options = PoolOptions::from_toml_str("limit = 50\ncount = 5").unwrap();
    /// assert_eq!(options.limit, 50);
    /// assert!(PoolOptions::from_toml_str("limit = 10\ncount = 5").is_err());
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let options: Self = toml::from_str(s).map_err(|e| Error::Config {
            reason: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that `limit` is within [`MAX_LIMIT`](crate::sieve::MAX_LIMIT)
    /// and that a strict pool can actually be filled.
    ///
    /// Runs the sieve, so this costs as much as building the pool.
    pub fn validate(&self) -> Result<()> {
        let limit = Limit::new(self.limit).map_err(|e| Error::Config {
            reason: e.to_string(),
        })?;
        if self.policy == SampleSizePolicy::Strict {
            let available = limit.sieve().len();
            if self.count > available {
                return Err(Error::InvalidSampleSize {
                    requested: self.count,
                    available,
                });
            }
        }
        Ok(())
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            count: Self::default_count(),
            policy: SampleSizePolicy::default(),
        }
    }
}

/// Samples `options.count` distinct primes `<= options.limit` in random
/// order.
///
/// # Errors
/// [`Error::InvalidLimit`] if `limit` exceeds
/// [`MAX_LIMIT`](crate::sieve::MAX_LIMIT), and [`Error::InvalidSampleSize`]
/// under [`SampleSizePolicy::Strict`] when fewer than `count` primes exist
/// up to `limit`.
///
/// # Examples
/// ```
/// use u_evilmath::answers::{possible_answers, PoolOptions};
/// use u_evilmath::random::create_rng;
/// let answers = possible_answers(&PoolOptions::default(), &mut create_rng(42)).unwrap();
/// assert_eq!(answers.len(), 100);
/// ```
pub fn possible_answers<R: Rng + ?Sized>(options: &PoolOptions, rng: &mut R) -> Result<Vec<u64>> {
    let primes = Limit::new(options.limit)?.sieve();
    match options.policy {
        SampleSizePolicy::Strict => SampleSize::new(options.count).sample(&primes, rng),
        SampleSizePolicy::Capped => Ok(sample_capped(&primes, options.count, rng)),
    }
}
