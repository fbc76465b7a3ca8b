//! Coercion rules from [`Value`] to bool, i32 and f64.

use super::value::{Scalar, Value};

impl Value {
    /// Truthiness of the value.
    ///
    /// Only `bool`, strings, floats and the native `isize` are interpreted;
    /// every other integer width is `false`. Strings are `false` only when
    /// empty or exactly `"false"`, so `"0"` is `true` while the number `0`
    /// is `false`.
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Scalar(s) | Value::Ptr(s) => scalar_to_bool(s),
            Value::Null(_) | Value::Opaque(_) => false,
        }
    }

    /// The value as an integer within the `i32` range.
    ///
    /// `None` means no integer could be produced: an opaque value, an
    /// unparsable string, or a number outside `[i32::MIN, i32::MAX]`. Floats
    /// and numeric strings truncate toward zero. A null pointer converts the
    /// zero value of its pointee kind.
    pub fn to_int(&self) -> Option<i32> {
        match self {
            Value::Scalar(s) | Value::Ptr(s) => scalar_to_int(s),
            Value::Null(kind) => scalar_to_int(&kind.zero()),
            Value::Opaque(_) => None,
        }
    }

    /// The value as an `f64`.
    ///
    /// `None` only for a string that does not parse as a float. Kinds that
    /// have no float interpretation (integer widths other than `isize`,
    /// opaque values) and null pointers yield `Some(0.0)`.
    pub fn to_float(&self) -> Option<f64> {
        match self {
            Value::Scalar(s) | Value::Ptr(s) => scalar_to_float(s),
            Value::Null(_) | Value::Opaque(_) => Some(0.0),
        }
    }
}

fn scalar_to_bool(scalar: &Scalar) -> bool {
    match scalar {
        Scalar::Bool(v) => *v,
        Scalar::Str(v) => !matches!(v.as_str(), "" | "false"),
        Scalar::F32(v) => *v != 0.0,
        Scalar::F64(v) => *v != 0.0,
        Scalar::Isize(v) => *v != 0,
        Scalar::I8(_)
        | Scalar::I16(_)
        | Scalar::I32(_)
        | Scalar::I64(_)
        | Scalar::U8(_)
        | Scalar::U16(_)
        | Scalar::U32(_)
        | Scalar::U64(_)
        | Scalar::Usize(_) => false,
    }
}

fn scalar_to_int(scalar: &Scalar) -> Option<i32> {
    match scalar {
        Scalar::Bool(v) => Some(i32::from(*v)),
        Scalar::I8(v) => Some(i32::from(*v)),
        Scalar::I16(v) => Some(i32::from(*v)),
        Scalar::I32(v) => Some(*v),
        Scalar::U8(v) => Some(i32::from(*v)),
        Scalar::U16(v) => Some(i32::from(*v)),
        // Wide integers narrow only when in range; TryFrom is the range check.
        Scalar::I64(v) => i32::try_from(*v).ok(),
        Scalar::Isize(v) => i32::try_from(*v).ok(),
        Scalar::U32(v) => i32::try_from(*v).ok(),
        Scalar::U64(v) => i32::try_from(*v).ok(),
        Scalar::Usize(v) => i32::try_from(*v).ok(),
        Scalar::F32(v) => float32_to_int(*v),
        Scalar::F64(v) => float64_to_int(*v),
        Scalar::Str(v) => string_to_int(v),
    }
}

fn scalar_to_float(scalar: &Scalar) -> Option<f64> {
    match scalar {
        Scalar::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
        Scalar::Isize(v) => Some(*v as f64),
        Scalar::F32(v) => Some(f64::from(*v)),
        Scalar::F64(v) => Some(*v),
        Scalar::Str(v) => v.parse::<f64>().ok(),
        Scalar::I8(_)
        | Scalar::I16(_)
        | Scalar::I32(_)
        | Scalar::I64(_)
        | Scalar::U8(_)
        | Scalar::U16(_)
        | Scalar::U32(_)
        | Scalar::U64(_)
        | Scalar::Usize(_) => Some(0.0),
    }
}

/// Inclusive `[i32::MIN, i32::MAX]` check; NaN is never in range.
fn is_float64_in_range(value: f64) -> bool {
    value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX)
}

fn float64_to_int(value: f64) -> Option<i32> {
    is_float64_in_range(value).then(|| value.trunc() as i32)
}

/// Widening to f64 is exact, so the f64 bounds apply unchanged.
fn float32_to_int(value: f32) -> Option<i32> {
    float64_to_int(f64::from(value))
}

/// Parse with single precision, then apply the float rule.
fn string_to_int(value: &str) -> Option<i32> {
    let parsed = value.parse::<f32>().ok()?;
    float64_to_int(f64::from(parsed))
}
