//! Seed hashing
//!
//! Maps a seed string to the integer state of [`SeededRng`](super::SeededRng).
//! The recurrence is `hash * 31 + unit` over UTF-16 code units with 32-bit
//! signed wraparound, then the absolute value of the result.

/// Hash a seed string to a non-negative integer in `[0, 2^31]`
///
/// # Example
/// ```
/// use group_maker_core::hash_seed;
///
/// assert_eq!(hash_seed(""), 0);
/// assert_eq!(hash_seed("x"), 120);
/// ```
pub fn hash_seed(seed: &str) -> u32 {
    let hash = seed.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });
    // i32::MIN maps to 2^31, which still fits in u32
    hash.unsigned_abs()
}
