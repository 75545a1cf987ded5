//! # u-evilmath
//!
//! Prime sieving and unbiased sampling behind the evil-math answer pool.
//!
//! The crate sieves the primes up to a limit, then draws a fixed-size
//! random subset of them without replacement. The deliberately wrong
//! arithmetic that displays those answers lives alongside.
//!
//! ## Modules
//!
//! - [`sieve`] — Sieve of Eratosthenes and a trial-division check
//! - [`random`] — Seeded RNGs, Fisher-Yates shuffle, sampling without replacement
//! - [`answers`] — The "possible answers" pool built from the two above
//! - [`evil`] — Intentionally incorrect arithmetic
//! - [`error`] — The crate's error type
//!
//! ## Design Philosophy
//!
//! - **Injected randomness**: every random routine takes its generator as
//!   a parameter, so seeded runs are reproducible
//! - **Fail fast**: invalid sizes are errors, never truncated results
//!   (unless the capped behavior is asked for explicitly)
//! - **Property-based testing**: invariants verified via proptest

pub mod answers;
pub mod error;
pub mod evil;
pub mod random;
pub mod sieve;

pub use error::{Error, Result};
