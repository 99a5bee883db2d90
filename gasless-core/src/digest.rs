//! Hashing helpers.
//!
//! The wallet toolkit expects a SHA-224 entry point to exist in its host
//! environment; on the server that is simply a real digest.

use sha2::{Digest, Sha224, Sha256};

/// Hex-encoded SHA-224 of `data`
pub fn sha224_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha224::digest(data.as_ref()))
}

/// Hex-encoded SHA-256 of `data`
pub fn sha256_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(data.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha224_known_vectors() {
        assert_eq!(
            sha224_hex("abc"),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
        assert_eq!(
            sha224_hex(""),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
    }

    #[test]
    fn sha256_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
