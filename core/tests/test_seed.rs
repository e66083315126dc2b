//! Tests for token-hash parsing and seed derivation

use token_random_core_rs::{generate_random_hash, SeedError, TokenRng};

#[test]
fn test_minimal_hash_accepted() {
    assert!(TokenRng::from_hash("0x00").is_ok());
}

#[test]
fn test_full_length_hash_accepted() {
    let hash = "0x0d16bc2905299da0695af1edab2368c2cef2a2a44b1ff090a9cea17dbc0f573a";
    assert!(TokenRng::from_hash(hash).is_ok());
}

#[test]
fn test_mixed_case_hash_accepted() {
    // Hex digits are case-insensitive; the two spellings must seed
    // identically.
    let mut lower = TokenRng::from_hash("0xdeadbeef").unwrap();
    let mut upper = TokenRng::from_hash("0xDEADBEEF").unwrap();
    assert_eq!(lower.next_f64(), upper.next_f64());
}

#[test]
fn test_missing_prefix_rejected() {
    assert_eq!(
        TokenRng::from_hash("deadbeef").unwrap_err(),
        SeedError::MissingPrefix
    );
    assert_eq!(TokenRng::from_hash("").unwrap_err(), SeedError::MissingPrefix);
}

#[test]
fn test_uppercase_prefix_rejected() {
    // Only the canonical lowercase "0x" prefix is a valid token hash.
    assert_eq!(
        TokenRng::from_hash("0XDEADBEEF").unwrap_err(),
        SeedError::MissingPrefix
    );
}

#[test]
fn test_empty_digits_rejected() {
    assert_eq!(TokenRng::from_hash("0x").unwrap_err(), SeedError::Empty);
}

#[test]
fn test_odd_digit_count_rejected() {
    // A trailing odd digit is rejected outright, never silently dropped.
    assert_eq!(
        TokenRng::from_hash("0x123").unwrap_err(),
        SeedError::OddLength { digits: 3 }
    );
}

#[test]
fn test_non_hex_digit_rejected() {
    assert_eq!(
        TokenRng::from_hash("0xgg").unwrap_err(),
        SeedError::InvalidDigit {
            character: 'g',
            position: 2
        }
    );
}

#[test]
fn test_failed_reseed_leaves_stream_intact() {
    // No partial mutation: after a rejected reseed, the generator must
    // continue the old stream exactly.
    let mut rng = TokenRng::from_hash("0x00").unwrap();
    let mut control = TokenRng::from_hash("0x00").unwrap();

    rng.next_f64();
    control.next_f64();

    assert!(rng.reseed("not-a-hash").is_err());
    assert!(rng.reseed("0x").is_err());
    assert!(rng.reseed("0xabc").is_err());

    for _ in 0..10 {
        assert_eq!(rng.next_f64(), control.next_f64());
    }
}

#[test]
fn test_failed_reseed_keeps_gaussian_spare() {
    let mut rng = TokenRng::from_hash("0x00").unwrap();
    let mut control = TokenRng::from_hash("0x00").unwrap();

    rng.gaussian(0.0, 1.0);
    control.gaussian(0.0, 1.0);

    assert!(rng.reseed("0xzz").is_err());

    // The cached spare must survive the failed reseed.
    assert_eq!(rng.gaussian(0.0, 1.0), control.gaussian(0.0, 1.0));
}

#[test]
fn test_generate_random_hash_shape() {
    let hash = generate_random_hash();
    assert_eq!(hash.len(), 66, "expected 0x + 64 digits");
    assert!(hash.starts_with("0x"));
    assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));

    // And it must round-trip through the seeder.
    assert!(TokenRng::from_hash(&hash).is_ok());
}

#[test]
fn test_generate_random_hash_is_not_deterministic() {
    // Collision over a handful of 256-bit draws means the entropy source
    // is broken.
    let a = generate_random_hash();
    let b = generate_random_hash();
    assert_ne!(a, b);
}

#[test]
fn test_leading_zero_bytes_matter() {
    // "0x00" (one zero byte) and "0x0000" (two zero bytes) hash the byte
    // sequence length, so they must seed different streams.
    let mut one = TokenRng::from_hash("0x00").unwrap();
    let mut two = TokenRng::from_hash("0x0000").unwrap();
    assert_ne!(one.next_f64(), two.next_f64());
}
