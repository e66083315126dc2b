//! PCG-XSH-RR random number generator
//!
//! A counter-based generator holding a single 64-bit state word, advanced by
//! a fixed linear recurrence and filtered through the XSH-RR output
//! transform (xorshift high bits, then random rotate). Fast, statistically
//! solid, and - the property everything here depends on - exactly
//! reproducible from a token hash.
//!
//! # Determinism
//!
//! Same hash → same sequence of draws. This is CRITICAL: a token's artwork
//! is reconstructed from its hash alone, so every conforming implementation
//! must emit bit-identical streams. The advance and output transform below
//! are pinned by golden vectors in `tests/test_rng_determinism.rs`.
//!
//! This generator is not suitable for security purposes.

use crate::seed::{self, SeedError};

/// Multiplier of the linear recurrence (Knuth's MMIX constant).
const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Increment of the linear recurrence.
const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Scale factor mapping a u32 output to [0, 1).
const OUTPUT_SCALE: f64 = 1.0 / 4_294_967_296.0;

/// Deterministic token-hash-seeded random number generator
///
/// Each instance owns its state; concurrent callers each hold a private
/// generator with no locking. Re-seeding fully replaces the state word and
/// clears the cached Gaussian spare, so no draw can mix pre- and post-seed
/// values.
///
/// # Example
/// ```
/// use token_random_core_rs::TokenRng;
///
/// let mut rng = TokenRng::from_hash("0x00").unwrap();
/// let value = rng.next_f64();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct TokenRng {
    /// Internal state (64-bit); all arithmetic wraps
    state: u64,
    /// Cached spare from the last Marsaglia polar iteration
    pub(crate) gaussian_spare: Option<f64>,
}

impl TokenRng {
    /// Create a generator seeded from a token hash.
    ///
    /// # Errors
    ///
    /// Returns a [`SeedError`] if `hash` is not `0x` followed by a
    /// non-empty, even-length hex digit sequence.
    ///
    /// # Example
    /// ```
    /// use token_random_core_rs::TokenRng;
    ///
    /// let rng = TokenRng::from_hash("0xdeadbeef").unwrap();
    /// assert!(TokenRng::from_hash("deadbeef").is_err());
    /// ```
    pub fn from_hash(hash: &str) -> Result<Self, SeedError> {
        Ok(Self {
            state: seed::derive_state(hash)?,
            gaussian_spare: None,
        })
    }

    /// Re-seed this generator from a new token hash.
    ///
    /// Destructive: the previous stream is unrecoverable afterwards. On
    /// failure the generator is left exactly as it was - state and cached
    /// spare unchanged.
    ///
    /// # Example
    /// ```
    /// use token_random_core_rs::TokenRng;
    ///
    /// let mut rng = TokenRng::from_hash("0x00").unwrap();
    /// let first = rng.next_f64();
    ///
    /// rng.reseed("0x00").unwrap();
    /// assert_eq!(rng.next_f64(), first);
    /// ```
    pub fn reseed(&mut self, hash: &str) -> Result<(), SeedError> {
        let state = seed::derive_state(hash)?;
        self.state = state;
        self.gaussian_spare = None;
        Ok(())
    }

    /// Generate the next uniform value in [0, 1).
    ///
    /// Advances the state by the linear recurrence and computes the XSH-RR
    /// output from the pre-advance state. Every call both mutates state and
    /// returns a value; no call is side-effect-free.
    ///
    /// # Example
    /// ```
    /// use token_random_core_rs::TokenRng;
    ///
    /// let mut rng = TokenRng::from_hash("0x00").unwrap();
    /// let a = rng.next_f64();
    /// let b = rng.next_f64();
    /// assert_ne!(a, b);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let old = self.state;
        self.state = old.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rotation = (old >> 59) as u32;
        let output = xorshifted.rotate_right(rotation);

        f64::from(output) * OUTPUT_SCALE
    }

    /// Get the current state word (for diagnostics and tests).
    pub fn state(&self) -> u64 {
        self.state
    }
}
