//! Seed derivation from hex-encoded token identifiers
//!
//! A token hash is a string of the form `0x` followed by a non-empty, even
//! number of hex digits. The digits are decoded to bytes, hashed twice with
//! MurmurHash2 under two fixed digest seeds, and the two 32-bit digests are
//! packed into the 64-bit generator state.
//!
//! Malformed input is rejected up front with a [`SeedError`]; no generator
//! state is touched on failure.

mod murmur2;

use thiserror::Error;

pub use murmur2::mix32;

/// Digest seed for the low 32 bits of the generator state.
const DIGEST_SEED_LO: u32 = 1_690_382_925;

/// Digest seed for the high 32 bits of the generator state.
const DIGEST_SEED_HI: u32 = 72_970_470;

/// Errors raised when a token hash cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("token hash must start with \"0x\"")]
    MissingPrefix,

    #[error("token hash has no hex digits after the \"0x\" prefix")]
    Empty,

    #[error("token hash has an odd number of hex digits ({digits})")]
    OddLength { digits: usize },

    #[error("invalid hex digit {character:?} at offset {position} of the token hash")]
    InvalidDigit { character: char, position: usize },
}

/// Derive the 64-bit generator state from a token hash.
///
/// Decodes the digits after the `0x` prefix into bytes (two digits per
/// byte), computes the two MurmurHash2 digests, and packs them:
/// low 32 bits = first digest, high 32 bits = second digest.
///
/// # Errors
///
/// Returns a [`SeedError`] if the prefix is missing, the digit sequence is
/// empty or odd-length, or a character is not a hex digit.
///
/// # Example
/// ```
/// use token_random_core_rs::seed;
///
/// let state = seed::derive_state("0x00").unwrap();
/// assert_eq!(state, 6287518478555223448);
/// ```
pub fn derive_state(hash: &str) -> Result<u64, SeedError> {
    let bytes = decode_hash(hash)?;
    let lo = mix32(&bytes, DIGEST_SEED_LO);
    let hi = mix32(&bytes, DIGEST_SEED_HI);
    Ok(u64::from(lo) | (u64::from(hi) << 32))
}

/// Decode the digits of a `0x`-prefixed hash string into bytes.
fn decode_hash(hash: &str) -> Result<Vec<u8>, SeedError> {
    let digits = hash.strip_prefix("0x").ok_or(SeedError::MissingPrefix)?;
    if digits.is_empty() {
        return Err(SeedError::Empty);
    }

    hex::decode(digits).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => SeedError::InvalidDigit {
            character: c,
            // Report the offset within the full string, prefix included
            position: index + 2,
        },
        // Remaining variants are both length errors
        _ => SeedError::OddLength {
            digits: digits.len(),
        },
    })
}

/// Generate a pure random token hash, useful for testing.
///
/// Produces `0x` followed by 64 lowercase hex digits from OS entropy.
/// NOT deterministic - this helper is explicitly outside the reproducible
/// contract and must never feed generative output that has to be
/// reconstructable.
///
/// # Example
/// ```
/// use token_random_core_rs::generate_random_hash;
///
/// let hash = generate_random_hash();
/// assert_eq!(hash.len(), 66);
/// assert!(hash.starts_with("0x"));
/// ```
pub fn generate_random_hash() -> String {
    use rand::Rng;

    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut entropy = rand::rng();
    let mut hash = String::with_capacity(66);
    hash.push_str("0x");
    for _ in 0..64 {
        hash.push(HEX_DIGITS[entropy.random_range(0..16)] as char);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_state_packs_digests() {
        // digests for the byte [0x00] under the two fixed seeds
        let lo = mix32(&[0], DIGEST_SEED_LO);
        let hi = mix32(&[0], DIGEST_SEED_HI);
        assert_eq!(lo, 1_492_981_144);
        assert_eq!(hi, 1_463_926_974);

        let state = derive_state("0x00").unwrap();
        assert_eq!(state & 0xffff_ffff, u64::from(lo));
        assert_eq!(state >> 32, u64::from(hi));
    }

    #[test]
    fn test_decode_is_positional() {
        // byte j = digit pair at offset 2 + 2j
        assert_eq!(decode_hash("0x0a0b0c").unwrap(), vec![0x0a, 0x0b, 0x0c]);
    }

    #[test]
    fn test_uppercase_digits_accepted() {
        assert_eq!(decode_hash("0xDEADBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_invalid_digit_position_counts_prefix() {
        let err = derive_state("0x00zz").unwrap_err();
        assert_eq!(
            err,
            SeedError::InvalidDigit {
                character: 'z',
                position: 4
            }
        );
    }
}
