//! SHA-1 digest utilities
//!
//! TYPO3 file identifiers are keyed on a truncated SHA-1 of a path string.
//! The digest is computed over the literal string, never over file content.

use sha1::{Digest, Sha1};

/// Compute the lowercase hexadecimal SHA-1 digest of string content.
pub fn sha1_hex(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// The first `width` hex characters of [`sha1_hex`].
///
/// `width` is clamped to the full digest length of 40.
pub fn short_sha1_hex(content: &str, width: usize) -> String {
    let mut hex = sha1_hex(content);
    hex.truncate(width.min(hex.len()));
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha1_known_value() {
        assert_eq!(
            sha1_hex("hello world"),
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
        );
    }

    #[test]
    fn sha1_of_empty_string() {
        assert_eq!(sha1_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn short_digest_is_prefix() {
        assert_eq!(short_sha1_hex("hello world", 4), "2aae");
        assert_eq!(short_sha1_hex("", 4), "da39");
    }

    #[test]
    fn short_digest_width_is_clamped() {
        assert_eq!(short_sha1_hex("hello world", 100).len(), 40);
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(sha1_hex("gojs_foo/src/a.js"), sha1_hex("gojs_foo/src/a.js"));
        assert_ne!(sha1_hex("gojs_foo/src/a.js"), sha1_hex("gojs_foo/src/b.js"));
    }
}
