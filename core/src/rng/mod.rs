//! Deterministic random number generation
//!
//! [`TokenRng`] is a PCG-XSH-RR generator seeded from a token hash. All
//! randomness consumed by generative logic MUST go through a single owned
//! instance; the draw order is part of the reproducibility contract.

mod distributions;
mod pcg;

pub use pcg::TokenRng;
