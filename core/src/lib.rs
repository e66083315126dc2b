//! Token Random Core - Deterministic Hash-Seeded Random Engine
//!
//! Derives a fully reproducible stream of random draws from a hex-encoded
//! token identifier. Given the same hash, the engine produces byte-identical
//! output on every platform, so downstream generative logic can reconstruct
//! the artifact tied to that identifier.
//!
//! # Architecture
//!
//! - **seed**: Hash parsing and seed derivation (MurmurHash2 digests)
//! - **rng**: The core generator (PCG-XSH-RR) and derived distributions
//!
//! # Critical Invariants
//!
//! 1. All state arithmetic wraps (mod 2^64 / mod 2^32); it never traps
//! 2. Same hash MUST produce the same sequence, forever
//! 3. Re-seeding fully replaces generator state and clears the Gaussian cache
//!
//! # Example
//!
//! ```
//! use token_random_core_rs::TokenRng;
//!
//! let mut rng = TokenRng::from_hash("0x00").unwrap();
//! let value = rng.next_f64();
//! assert!(value >= 0.0 && value < 1.0);
//! ```
//!
//! This engine is NOT cryptographically secure. Both the mixing hash and the
//! generator are non-cryptographic; use them only for reproducible content
//! generation.

// Module declarations
pub mod rng;
pub mod seed;

// Re-exports for convenience
pub use rng::TokenRng;
pub use seed::{generate_random_hash, SeedError};
