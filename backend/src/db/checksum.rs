//! Checksum calculation for dataset fingerprinting.

use sha2::{Digest, Sha256};

/// SHA-256 of a document's bytes, hex encoded.
///
/// Reported by the health endpoint so clients can tell when the data file
/// behind the dashboard has changed.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = br#"{"analytics": []}"#;
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
    }

    #[test]
    fn test_different_content_different_checksum() {
        assert_ne!(
            calculate_checksum(br#"{"analytics": [{}]}"#),
            calculate_checksum(br#"{"analytics": []}"#)
        );
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            calculate_checksum(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
