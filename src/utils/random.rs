//! Random string generation.
//!
//! Two strengths are offered:
//! - secure: every character index is drawn from the operating system's
//!   random source; failures are reported.
//! - fast: thread-local or caller-supplied generator, not suitable for
//!   secrets. There is no process-wide generator and no lock.

use std::borrow::Cow;

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

use crate::defaults;
use crate::error::{Error, Result};

/// A set of characters to draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset(Cow<'static, str>);

impl Charset {
    pub const fn from_static(chars: &'static str) -> Self {
        Charset(Cow::Borrowed(chars))
    }

    pub fn new(chars: impl Into<String>) -> Self {
        Charset(Cow::Owned(chars.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn chars(&self) -> Result<Vec<char>> {
        if self.is_empty() {
            return Err(Error::validation_invalid_argument(
                "charset",
                "Charset cannot be empty",
                None,
            ));
        }
        Ok(self.0.chars().collect())
    }
}

impl From<&'static str> for Charset {
    fn from(chars: &'static str) -> Self {
        Charset::from_static(chars)
    }
}

/// Uppercase and lowercase English letters.
pub const ALPHABETIC: Charset =
    Charset::from_static("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ");
/// Decimal digits.
pub const NUMERIC: Charset = Charset::from_static("0123456789");
/// Letters followed by digits.
pub const ALPHANUMERIC: Charset = Charset::from_static(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
);
/// Lowercase hexadecimal digits.
pub const HEX: Charset = Charset::from_static("0123456789abcdef");

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Cryptographically secure random string of `length` characters.
///
/// Every character is drawn uniformly from `charset`.
pub fn string_with_charset(length: usize, charset: &Charset) -> Result<String> {
    let chars = charset.chars()?;
    let len = u32::try_from(chars.len()).map_err(|_| {
        Error::validation_invalid_argument(
            "charset",
            "Charset is too large",
            Some(chars.len().to_string()),
        )
    })?;
    let mut rng = OsRng;

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let index = uniform_index(len, || {
            rng.try_next_u32()
                .map_err(|e| Error::random_source_failed(e.to_string()))
        })?;
        out.push(chars[index as usize]);
    }
    Ok(out)
}

/// Map 32-bit draws onto `0..len` without modulo bias by rejecting draws
/// from the incomplete top bucket.
fn uniform_index(len: u32, mut draw: impl FnMut() -> Result<u32>) -> Result<u32> {
    let range = 1u64 << 32;
    let zone = range - range % u64::from(len);
    loop {
        let r = draw()?;
        if u64::from(r) < zone {
            return Ok(r % len);
        }
    }
}

/// Fast, insecure random string of ASCII letters.
pub fn string(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| LETTERS[rng.random_range(0..LETTERS.len())] as char)
        .collect()
}

/// Fast random string drawn from `charset` using the supplied generator.
pub fn string_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    charset: &Charset,
) -> Result<String> {
    let chars = charset.chars()?;
    Ok((0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect())
}

/// Random string of `length` characters from `charset`.
///
/// An empty charset falls back to the configured default (alphanumeric
/// unless overridden in com.json). `secure` selects the operating system
/// source; otherwise the thread-local generator is used.
pub fn random_string(length: usize, charset: &Charset, secure: bool) -> Result<String> {
    let fallback;
    let charset = if charset.is_empty() {
        fallback = Charset::new(defaults::load_defaults().random.charset);
        &fallback
    } else {
        charset
    };

    if secure {
        string_with_charset(length, charset)
    } else {
        string_with_rng(&mut rand::rng(), length, charset)
    }
}
