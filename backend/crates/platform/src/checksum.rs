//! Rolling Checksum
//!
//! Non-cryptographic 32-bit string hash (`h = h * 31 + c` over UTF-16 code
//! units, wrapping), rendered as the lowercase hex of its absolute value.
//!
//! This only obscures a constant in served code. It is trivially reversible
//! and must never be mistaken for password hashing.

/// Compute the checksum of `input`.
///
/// ```
/// use platform::checksum::rolling_checksum;
/// assert_eq!(rolling_checksum("7050"), "19bb34");
/// ```
pub fn rolling_checksum(input: &str) -> String {
    let hash = input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });

    // i32::MIN has no i32 absolute value
    format!("{:x}", i64::from(hash).abs())
}

/// Compare `input`'s checksum with an expected hex digest
pub fn matches_checksum(input: &str, expected: &str) -> bool {
    crate::crypto::constant_time_eq(
        rolling_checksum(input).as_bytes(),
        expected.trim().to_ascii_lowercase().as_bytes(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(rolling_checksum(""), "0");
        assert_eq!(rolling_checksum("a"), "61");
        assert_eq!(rolling_checksum("7050"), "19bb34");
        assert_eq!(rolling_checksum("password"), "4889ba9b");
    }

    #[test]
    fn test_wraps_and_takes_absolute_value() {
        // Long enough to overflow 32 bits several times over
        let digest = rolling_checksum("the quick brown fox jumps over the lazy dog");
        assert!(!digest.starts_with('-'));
        assert!(digest.len() <= 8);
    }

    #[test]
    fn test_hashes_utf16_code_units() {
        // 'à' is U+00E0 (224): 224 * 31 + '8' (56) = 7000 = 0x1b58
        assert_eq!(rolling_checksum("\u{e0}8"), "1b58");
        // Astral characters contribute two surrogate units
        assert_ne!(rolling_checksum("\u{1F600}"), rolling_checksum("\u{F600}"));
    }

    #[test]
    fn test_matches_checksum() {
        assert!(matches_checksum("7050", "19bb34"));
        assert!(matches_checksum("7050", " 19BB34 "));
        assert!(!matches_checksum("7050", "1b58"));
    }
}
