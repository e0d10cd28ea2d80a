//! The dynamically-typed JSON value model.
//!
//! [`Value`] is a tagged enum over the eight kinds a document slot can hold:
//! the seven concrete JSON kinds plus [`Undefined`], the "no value present"
//! tombstone. `Undefined` is distinct from JSON `null`: it never appears in
//! parsed input (JSON text has no token for it) and serializes as `null` on
//! output. A default-constructed `Value` is `Undefined`, and move-extraction
//! via [`Value::take`] or the `release_*` accessors leaves `Undefined`
//! behind.
//!
//! Numbers keep the integral/floating distinction at write time but
//! cross-convert on read: [`Value::as_i64`] and [`Value::as_f64`] accept
//! either numeric kind and return a converted copy, never a reference.
//! Non-numeric reads (`as_str`, `as_array`, ...) borrow the owned storage
//! and require an exact kind match.
//!
//! Indexing follows JavaScript-flavored peek/ensure semantics:
//!
//! ```rust
//! use dynjson_core::Value;
//!
//! let mut v = Value::default();
//! v["user"]["id"] = 7.into();         // ensure: coerces and vivifies
//! assert_eq!(v["user"]["id"].as_i64().unwrap(), 7);
//! assert!(v["user"]["missing"].is_undefined()); // peek: never mutates
//! ```
//!
//! [`Undefined`]: Value::Undefined

use crate::error::{DynjsonError, Result};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Element sequence owned by an array value.
pub type Array = Vec<Value>;

/// Key-value mapping owned by an object value. Keys are unique; iteration
/// order is unspecified.
pub type Object = HashMap<String, Value>;

/// The active variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integral,
    FloatingPoint,
    Boolean,
    Null,
    String,
    Array,
    Object,
    Undefined,
}

impl Kind {
    /// Stable name used in diagnostics and `BadCast` messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Integral => "integral",
            Kind::FloatingPoint => "floating_point",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed JSON value.
///
/// Exactly one kind is active at a time. Arrays, objects and strings are
/// exclusively owned by their containing `Value`; `Clone` performs a full
/// deep copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Integral(i64),
    FloatingPoint(f64),
    String(String),
    Array(Array),
    Object(Object),
}

/// Shared read-only sentinel returned by non-mutating lookups that miss.
static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// Creates an empty array value.
    pub fn array() -> Value {
        Value::Array(Array::new())
    }

    /// Creates an empty object value.
    pub fn object() -> Value {
        Value::Object(Object::new())
    }

    /// The active kind tag.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integral(_) => Kind::Integral,
            Value::FloatingPoint(_) => Kind::FloatingPoint,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_null_or_undefined(&self) -> bool {
        self.is_null() || self.is_undefined()
    }

    /// True for either numeric kind; a numeric read would succeed.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integral(_) | Value::FloatingPoint(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Replaces the held kind and content. Accepts anything convertible to
    /// a `Value`, including another `Value`.
    pub fn set(&mut self, v: impl Into<Value>) {
        *self = v.into();
    }

    /// Moves the content out, leaving this value `Undefined`.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Reads the value as `i64`, converting from either numeric kind.
    /// Returns a copy: the stored representation may be floating-point.
    pub fn as_i64(&self) -> Result<i64> {
        match *self {
            Value::Integral(n) => Ok(n),
            Value::FloatingPoint(f) => Ok(f as i64),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("integral")),
        }
    }

    /// Reads the value as `f64`, converting from either numeric kind.
    pub fn as_f64(&self) -> Result<f64> {
        match *self {
            Value::Integral(n) => Ok(n as f64),
            Value::FloatingPoint(f) => Ok(f),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("floating_point")),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("boolean")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("string")),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("string")),
        }
    }

    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("array")),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("object")),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("object")),
        }
    }

    /// Extracts the owned string, leaving this value `Undefined`.
    /// On kind mismatch nothing is modified.
    pub fn release_string(&mut self) -> Result<String> {
        match self {
            Value::String(s) => {
                let s = std::mem::take(s);
                *self = Value::Undefined;
                Ok(s)
            }
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("string")),
        }
    }

    /// Extracts the owned array, leaving this value `Undefined`.
    pub fn release_array(&mut self) -> Result<Array> {
        match self {
            Value::Array(arr) => {
                let arr = std::mem::take(arr);
                *self = Value::Undefined;
                Ok(arr)
            }
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("array")),
        }
    }

    /// Extracts the owned object, leaving this value `Undefined`.
    pub fn release_object(&mut self) -> Result<Object> {
        match self {
            Value::Object(obj) => {
                let obj = std::mem::take(obj);
                *self = Value::Undefined;
                Ok(obj)
            }
            Value::Undefined => Err(DynjsonError::ValueIsUndefined),
            _ => Err(self.bad_cast("object")),
        }
    }

    fn bad_cast(&self, to: &'static str) -> DynjsonError {
        DynjsonError::BadCast {
            from: self.kind(),
            to,
        }
    }
}

/// Read-only key lookup. Misses (non-object receiver or absent key) return
/// the shared `Undefined` sentinel and never mutate.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self {
            Value::Object(obj) => obj.get(key).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }
}

/// Read-write key lookup. A non-object receiver is reset to an empty object
/// (discarding prior content); an absent key is inserted as `Undefined`.
impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        if !self.is_object() {
            *self = Value::object();
        }
        let Value::Object(obj) = self else {
            unreachable!("receiver was coerced to an object")
        };
        obj.entry(key.to_owned()).or_insert(Value::Undefined)
    }
}

/// Read-only element lookup. Misses (non-array receiver or out-of-range
/// index) return the shared `Undefined` sentinel and never mutate.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(arr) => arr.get(index).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }
}

/// Read-write element lookup. A non-array receiver is reset to an empty
/// array; indexing past the end grows the array, filling the gap (and the
/// requested slot) with `Null`.
impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        if !self.is_array() {
            *self = Value::array();
        }
        let Value::Array(arr) = self else {
            unreachable!("receiver was coerced to an array")
        };
        if index >= arr.len() {
            arr.resize(index + 1, Value::Null);
        }
        &mut arr[index]
    }
}

macro_rules! impl_from_integral {
    ($($t:ty)*) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Value {
                Value::Integral(i64::from(v))
            }
        }
    )*};
}

impl_from_integral!(i8 i16 i32 i64 u8 u16 u32);

impl From<f32> for Value {
    fn from(v: f32) -> Value {
        Value::FloatingPoint(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::FloatingPoint(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::String(v)
    }
}

/// The unit type maps to JSON `null`.
impl From<()> for Value {
    fn from(_: ()) -> Value {
        Value::Null
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<HashMap<String, V>> for Value {
    fn from(v: HashMap<String, V>) -> Value {
        Value::Object(v.into_iter().map(|(k, val)| (k, val.into())).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Value {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

/// Compact JSON rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::serialize(self))
    }
}
