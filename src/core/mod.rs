// Public modules
pub mod array;
pub mod convert;
pub mod defaults;
pub mod error;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use convert::{Kind, Scalar, Value};
pub use error::{Error, ErrorCode, Result};
