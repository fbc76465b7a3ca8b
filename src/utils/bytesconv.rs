//! Conversions between byte buffers, strings and floats.
//!
//! Byte/string views borrow when the input is already valid UTF-8 and only
//! allocate when invalid sequences must be replaced.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// View bytes as text without copying when they are valid UTF-8.
///
/// Invalid sequences are replaced with U+FFFD in an owned copy.
pub fn bytes_to_str(b: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(b)
}

/// View text as its UTF-8 bytes.
pub fn str_to_bytes(s: &str) -> &[u8] {
    s.as_bytes()
}

/// Take ownership of a byte buffer as a `String`, reusing the allocation
/// when the bytes are valid UTF-8.
pub fn bytes_into_string(b: Vec<u8>) -> String {
    match String::from_utf8(b) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Big-endian IEEE-754 encoding of an `f64`.
pub fn float64_to_bytes(f: f64) -> [u8; 8] {
    f.to_be_bytes()
}

/// Decode the first eight bytes as a big-endian `f64`.
pub fn bytes_to_float64(bytes: &[u8]) -> Result<f64> {
    let head: [u8; 8] = bytes
        .get(..8)
        .and_then(|head| head.try_into().ok())
        .ok_or_else(|| {
            Error::validation_invalid_argument(
                "bytes",
                format!("need 8 bytes to decode an f64, got {}", bytes.len()),
                None,
            )
        })?;

    Ok(f64::from_be_bytes(head))
}
