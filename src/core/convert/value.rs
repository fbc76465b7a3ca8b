use std::fmt;

/// Primitive kinds a [`Value`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    /// Native-width signed integer.
    Isize,
    U8,
    U16,
    U32,
    U64,
    /// Native-width unsigned integer.
    Usize,
    F32,
    F64,
    Str,
}

impl Kind {
    /// The zero value of this kind (`false`, `0`, `0.0` or `""`).
    pub fn zero(self) -> Scalar {
        match self {
            Kind::Bool => Scalar::Bool(false),
            Kind::I8 => Scalar::I8(0),
            Kind::I16 => Scalar::I16(0),
            Kind::I32 => Scalar::I32(0),
            Kind::I64 => Scalar::I64(0),
            Kind::Isize => Scalar::Isize(0),
            Kind::U8 => Scalar::U8(0),
            Kind::U16 => Scalar::U16(0),
            Kind::U32 => Scalar::U32(0),
            Kind::U64 => Scalar::U64(0),
            Kind::Usize => Scalar::Usize(0),
            Kind::F32 => Scalar::F32(0.0),
            Kind::F64 => Scalar::F64(0.0),
            Kind::Str => Scalar::Str(String::new()),
        }
    }
}

/// A primitive value of one of the [`Kind`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Str(String),
}

impl Scalar {
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Bool(_) => Kind::Bool,
            Scalar::I8(_) => Kind::I8,
            Scalar::I16(_) => Kind::I16,
            Scalar::I32(_) => Kind::I32,
            Scalar::I64(_) => Kind::I64,
            Scalar::Isize(_) => Kind::Isize,
            Scalar::U8(_) => Kind::U8,
            Scalar::U16(_) => Kind::U16,
            Scalar::U32(_) => Kind::U32,
            Scalar::U64(_) => Kind::U64,
            Scalar::Usize(_) => Kind::Usize,
            Scalar::F32(_) => Kind::F32,
            Scalar::F64(_) => Kind::F64,
            Scalar::Str(_) => Kind::Str,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::Isize(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::Usize(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
            Scalar::Str(v) => f.write_str(v),
        }
    }
}

/// A dynamically typed value accepted by the coercion functions.
///
/// Pointers are modelled one level deep: `Ptr` holds the pointee, `Null`
/// remembers the pointee kind so rules that recurse on the zero value can
/// find it. `Option<T>` converts into the pointer forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Ptr(Scalar),
    Null(Kind),
    /// A value outside the coercible set, kept only as its rendering.
    Opaque(String),
}

impl Value {
    /// The scalar behind this value after one level of dereference.
    pub fn scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) | Value::Ptr(s) => Some(s),
            Value::Null(_) | Value::Opaque(_) => None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Value::Ptr(_) | Value::Null(_))
    }

    /// Kind of the value or pointee; `None` for opaque values.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Scalar(s) | Value::Ptr(s) => Some(s.kind()),
            Value::Null(kind) => Some(*kind),
            Value::Opaque(_) => None,
        }
    }

    pub fn opaque(rendering: impl Into<String>) -> Self {
        Value::Opaque(rendering.into())
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::$variant(value))
                }
            }

            impl From<Option<$ty>> for Value {
                fn from(value: Option<$ty>) -> Self {
                    match value {
                        Some(v) => Value::Ptr(Scalar::$variant(v)),
                        None => Value::Null(Kind::$variant),
                    }
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Str,
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::from(value))
    }
}

impl From<Option<&str>> for Value {
    fn from(value: Option<&str>) -> Self {
        value.map(str::to_string).into()
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

/// Loosely typed JSON maps onto the coercible set: integers that fit the
/// native width become `Isize`, larger ones `U64`, other numbers `F64`.
/// `null` is a null string pointer; arrays and objects are opaque.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Value::Null(Kind::Str),
            Json::Bool(b) => b.into(),
            Json::Number(n) => {
                if let Some(i) = n.as_i64().and_then(|i| isize::try_from(i).ok()) {
                    i.into()
                } else if let Some(u) = n.as_u64() {
                    u.into()
                } else {
                    n.as_f64().unwrap_or(f64::NAN).into()
                }
            }
            Json::String(s) => s.into(),
            other => Value::Opaque(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) | Value::Ptr(s) => fmt::Display::fmt(s, f),
            Value::Null(_) => Ok(()),
            Value::Opaque(rendering) => f.write_str(rendering),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_becomes_pointer_forms() {
        assert_eq!(Value::from(Some(5i32)), Value::Ptr(Scalar::I32(5)));
        assert_eq!(Value::from(None::<u64>), Value::Null(Kind::U64));
        assert_eq!(Value::from(None::<&str>), Value::Null(Kind::Str));
        assert!(Value::from(Some(1.5f32)).is_pointer());
        assert!(!Value::from(1.5f32).is_pointer());
    }

    #[test]
    fn kind_zero_round_trips() {
        for kind in [Kind::Bool, Kind::I64, Kind::Usize, Kind::F32, Kind::Str] {
            assert_eq!(kind.zero().kind(), kind);
        }
    }

    #[test]
    fn json_numbers_pick_native_int_first() {
        assert_eq!(Value::from(json!(42)), Value::Scalar(Scalar::Isize(42)));
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Scalar(Scalar::U64(u64::MAX))
        );
        assert_eq!(Value::from(json!(2.5)), Value::Scalar(Scalar::F64(2.5)));
    }

    #[test]
    fn json_compound_values_are_opaque() {
        assert_eq!(Value::from(json!([1, 2])), Value::Opaque("[1,2]".to_string()));
        assert_eq!(Value::from(json!(null)), Value::Null(Kind::Str));
        assert_eq!(Value::from(json!({})).kind(), None);
    }

    #[test]
    fn display_renders_pointee() {
        assert_eq!(Value::from(Some("hi")).to_string(), "hi");
        assert_eq!(Value::from(23.03f32).to_string(), "23.03");
        assert_eq!(Value::from(None::<i32>).to_string(), "");
    }
}
