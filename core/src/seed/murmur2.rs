//! MurmurHash2, 32-bit
//!
//! Non-cryptographic mixing hash used to spread the token-hash bytes into
//! well-distributed 32-bit digests. The digest values are part of the
//! cross-implementation contract: any change here changes every stream
//! derived from every token hash.
//!
//! # Determinism
//!
//! The algorithm is fixed: little-endian 4-byte words, the 0x5bd1e995
//! multiplier, tail folding with shifts 16/8/0, and the standard
//! 13/15 finalization. All multiplication wraps mod 2^32.

const M: u32 = 0x5bd1_e995;

/// Hash a byte sequence into a 32-bit digest.
///
/// # Arguments
/// * `bytes` - Input bytes (the decoded token hash)
/// * `seed` - Digest seed; two fixed seeds yield the two independent
///   digests that form the generator state
///
/// # Example
/// ```
/// use token_random_core_rs::seed::mix32;
///
/// // Same bytes + same seed = same digest
/// assert_eq!(mix32(&[0xde, 0xad], 7), mix32(&[0xde, 0xad], 7));
/// ```
pub fn mix32(bytes: &[u8], seed: u32) -> u32 {
    let mut h: u32 = seed ^ bytes.len() as u32;

    let mut chunks = bytes.chunks_exact(4);
    for word in &mut chunks {
        let mut k = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> 24;
        k = k.wrapping_mul(M);
        h = h.wrapping_mul(M) ^ k;
    }

    // Fold the 1-3 trailing bytes, highest offset first
    let tail = chunks.remainder();
    if tail.len() == 3 {
        h ^= u32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        h ^= u32::from(tail[1]) << 8;
    }
    if !tail.is_empty() {
        h ^= u32::from(tail[0]);
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    h
}
