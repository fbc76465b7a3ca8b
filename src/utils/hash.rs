//! Hex digests of text.

use md5::Md5;
use sha2::{Digest, Sha256};

/// Lowercase hex MD5 digest. Not for security use.
pub fn md5_hash(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

/// Lowercase hex SHA-256 digest.
pub fn sha256_hash(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
