//! Peripheral helpers with no dependency on the coercion core.
//!
//! - `bytesconv` - Byte/string views and f64 byte encoding
//! - `file` - File-system predicates, copy, removal, size formatting
//! - `gh` - GitHub Actions output-file writing
//! - `hash` - Hex digests
//! - `io` - File I/O with consistent error handling
//! - `random` - Secure and fast random strings
//! - `trace` - Execution-time logging

pub mod bytesconv;
pub mod file;
pub mod gh;
pub mod hash;
pub mod io;
pub mod random;
pub mod trace;
