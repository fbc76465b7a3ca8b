//! Wrapping and unwrapping values behind pointers.
//!
//! A nullable pointer is an `Option`, an owned pointer a `Box`, and a
//! pointer into an existing collection a shared borrow. Missing values fall
//! back to `T::default()`.

use std::collections::HashMap;

/// Move a value behind an owned pointer.
pub fn to_ptr<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// The pointed-to value, or `T::default()` for a null pointer.
pub fn from_ptr<T: Clone + Default>(ptr: Option<&T>) -> T {
    ptr.cloned().unwrap_or_default()
}

/// Borrow every element of `src`. The borrows cannot outlive `src`.
pub fn slice_to_ptr_slice<T>(src: &[T]) -> Vec<&T> {
    src.iter().collect()
}

/// Copy the pointed-to values out; `None` entries become `T::default()`.
pub fn ptr_slice_to_slice<T: Clone + Default>(src: &[Option<&T>]) -> Vec<T> {
    src.iter().map(|ptr| from_ptr(*ptr)).collect()
}

/// Copy every value of `src` into a non-null entry.
pub fn map_to_ptr_map<T: Clone>(src: &HashMap<String, T>) -> HashMap<String, Option<T>> {
    src.iter()
        .map(|(k, v)| (k.clone(), Some(v.clone())))
        .collect()
}

/// Copy the non-null entries of `src`; keys holding `None` are dropped.
pub fn ptr_map_to_map<T: Clone>(src: &HashMap<String, Option<T>>) -> HashMap<String, T> {
    src.iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
        .collect()
}
