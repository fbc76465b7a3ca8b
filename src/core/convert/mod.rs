//! Dynamic value coercion, pointer helpers and name casing.
//!
//! - `value` - the [`Value`] sum type and its conversions
//! - `coerce` - bool / int / float rules
//! - `ptr` - Option, Box and borrow wrapping helpers
//! - `strings` - snake_case and TitleCase name conversion
//!
//! The free functions accept anything convertible into a [`Value`], so
//! callers can pass primitives, `Option`s (pointer semantics) or JSON
//! directly:
//!
//! ```
//! use com::convert::{to_bool, to_float, to_int};
//!
//! assert_eq!(to_int("3.9"), Some(3));
//! assert_eq!(to_int(i64::MAX), None);
//! assert!(to_bool("0"));
//! assert_eq!(to_float("abc"), None);
//! ```

mod coerce;
pub mod ptr;
pub mod strings;
mod value;

pub use ptr::{
    from_ptr, map_to_ptr_map, ptr_map_to_map, ptr_slice_to_slice, slice_to_ptr_slice, to_ptr,
};
pub use strings::{snake_cased_name, title_cased_name};
pub use value::{Kind, Scalar, Value};

/// Render a value as text. String pointers come back as-is, null pointers
/// as the empty string.
pub fn to_string(value: impl Into<Value>) -> String {
    let value: Value = value.into();
    value.to_string()
}

/// See [`Value::to_bool`]. Note that the string `"0"` is `true`.
pub fn to_bool(value: impl Into<Value>) -> bool {
    let value: Value = value.into();
    value.to_bool()
}

/// See [`Value::to_int`]; `None` is the "no integer" result.
pub fn to_int(value: impl Into<Value>) -> Option<i32> {
    let value: Value = value.into();
    value.to_int()
}

/// See [`Value::to_float`]; `None` only for unparsable strings.
pub fn to_float(value: impl Into<Value>) -> Option<f64> {
    let value: Value = value.into();
    value.to_float()
}
