// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heterogeneous key/value payloads.
//!
//! Structured context travels as an ordered `&[Value]` slice, alternating keys and
//! values.  Nothing in the adapter interprets the sequence; it is the scope that
//! pairs entries up when a record is rendered.
//!
//! ```rust
//! use scopewise::{kv, Value};
//!
//! let fields: Vec<Value> = kv!["pod", "web-0", "attempt", 3];
//! assert_eq!(fields[0].as_str(), Some("pod"));
//! assert_eq!(fields[3].to_string(), "3");
//! ```

use std::fmt::{Debug, Display};
use std::sync::Arc;

/**
A single entry of a key/value sequence.

Values are reference counted, so cloning a [Value] (or a `Vec<Value>`) never copies
the underlying data.  Two clones of the same value compare true under [Value::ptr_eq].
*/
#[derive(Clone)]
pub struct Value(Repr);

#[derive(Clone)]
enum Repr {
    Str(Arc<str>),
    Any(Arc<dyn Debug + Send + Sync>, &'static str),
}

impl Value {
    /// Wraps any debuggable value.  It renders with its `Debug` representation.
    pub fn new<T: Debug + Send + Sync + 'static>(value: T) -> Self {
        Value(Repr::Any(Arc::new(value), std::any::type_name::<T>()))
    }

    /// Wraps a string.  It renders without quotes.
    pub fn string(value: impl Into<Arc<str>>) -> Self {
        Value(Repr::Str(value.into()))
    }

    /// The string contents, if this value was built from a string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.0 {
            Repr::Str(s) => Some(&**s),
            Repr::Any(..) => None,
        }
    }

    /// Whether both values share the same allocation.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (&self.0, &other.0) {
            (Repr::Str(a), Repr::Str(b)) => Arc::ptr_eq(a, b),
            (Repr::Any(a, _), Repr::Any(b, _)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }

    /// The Rust type name of the wrapped value, `"string"` for strings.
    pub(crate) fn type_description(&self) -> &'static str {
        match &self.0 {
            Repr::Str(_) => "string",
            Repr::Any(_, type_name) => *type_name,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Repr::Str(s) => f.write_str(s),
            Repr::Any(v, _) => write!(f, "{:?}", v),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Repr::Str(s) => write!(f, "{:?}", s),
            Repr::Any(v, _) => write!(f, "{:?}", v),
        }
    }
}

/**
Conversion used by the [kv!](crate::kv) macro.

Implemented for strings, the primitive scalars and [Value] itself.  Anything else
can be passed as `Value::new(x)`.
*/
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    #[inline]
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for &Value {
    #[inline]
    fn into_value(self) -> Value {
        self.clone()
    }
}

impl IntoValue for &str {
    #[inline]
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for String {
    #[inline]
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for &String {
    #[inline]
    fn into_value(self) -> Value {
        Value::string(self.as_str())
    }
}

impl IntoValue for Arc<str> {
    #[inline]
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

macro_rules! scalar_into_value {
    ($($t:ty),*) => {
        $(
            impl IntoValue for $t {
                #[inline]
                fn into_value(self) -> Value {
                    Value::new(self)
                }
            }
        )*
    };
}

scalar_into_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char
);

/*
Boilerplate notes for Value:

IMPLEMENTED:
- Clone: cheap, Arc-backed
- Debug/Display: strings quote under Debug only

NOT IMPLEMENTED:
- PartialEq/Eq: arbitrary payloads have no equality; use ptr_eq for identity
- Hash/Ord: follow from the above
- Default: there is no sensible empty value
*/
