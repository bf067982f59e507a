//! SHA-256 hashing for content addressing.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 hash of in-memory data.
pub fn sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Hash several byte slices as one stream, with each part length-prefixed so
/// that `["AB", "C"]` and `["A", "BC"]` hash differently.
pub fn sha256_parts<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        let hash = sha256(b"hello world");
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_sha256_empty() {
        let hash = sha256(b"");
        assert_eq!(
            hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_parts_boundary_sensitive() {
        let a = sha256_parts([b"AB".as_slice(), b"C".as_slice()]);
        let b = sha256_parts([b"A".as_slice(), b"BC".as_slice()]);
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }
}
