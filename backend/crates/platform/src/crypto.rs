//! Encoding Utilities

use base64::{Engine, engine::general_purpose};

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Constant-time comparison
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_known_value() {
        assert_eq!(
            to_base64(b"admin@example.com:1714557600000"),
            "YWRtaW5AZXhhbXBsZS5jb206MTcxNDU1NzYwMDAwMA=="
        );
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"1b58", b"1b58"));
        assert!(!constant_time_eq(b"1b58", b"1b59"));
        assert!(!constant_time_eq(b"1b58", b"1b5"));
    }
}
