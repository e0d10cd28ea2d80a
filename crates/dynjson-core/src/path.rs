//! Dotted-path navigation over [`Value`] trees.
//!
//! Paths are strings split on a separator character (`.` by default):
//! `"server.listen.port"` names `value["server"]["listen"]["port"]`.
//! Lookups walk object entries only; absence is an [`Option`], never an
//! error. The `*_with` variants take an explicit separator.
//!
//! ```rust
//! use dynjson_core::{parse, path};
//!
//! let mut v = parse(r#"{"a":"_a","b":{"b1":"_b1"}}"#).unwrap();
//! path::put(&mut v, "b.b2", "_b2".into());
//! assert_eq!(path::find(&v, "b.b2").unwrap().as_str().unwrap(), "_b2");
//! assert_eq!(path::find(&v, "b.b1").unwrap().as_str().unwrap(), "_b1");
//! assert!(path::find(&v, "b.b3").is_none());
//! ```

use crate::value::{Object, Value};

/// Separator used by the non-`_with` entry points.
pub const DEFAULT_SEPARATOR: char = '.';

/// Looks up `path` in `value`, splitting on `.`.
pub fn find<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    find_with(value, path, DEFAULT_SEPARATOR)
}

/// Looks up `path` in `value`. Returns `None` if any step lands on a
/// non-object or an absent key.
pub fn find_with<'a>(value: &'a Value, path: &str, separator: char) -> Option<&'a Value> {
    let Value::Object(obj) = value else {
        return None;
    };
    match path.split_once(separator) {
        None => obj.get(path),
        Some((head, rest)) => find_with(obj.get(head)?, rest, separator),
    }
}

/// Mutable variant of [`find`].
pub fn find_mut<'a>(value: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    find_mut_with(value, path, DEFAULT_SEPARATOR)
}

/// Mutable variant of [`find_with`].
pub fn find_mut_with<'a>(value: &'a mut Value, path: &str, separator: char) -> Option<&'a mut Value> {
    let Value::Object(obj) = value else {
        return None;
    };
    match path.split_once(separator) {
        None => obj.get_mut(path),
        Some((head, rest)) => find_mut_with(obj.get_mut(head)?, rest, separator),
    }
}

/// Builds a chain of single-entry objects along `path` with `leaf` at the
/// deepest level: `create("a.b", leaf)` yields `{"a":{"b":leaf}}`.
pub fn create(path: &str, leaf: Value) -> Value {
    create_with(path, leaf, DEFAULT_SEPARATOR)
}

/// [`create`] with an explicit separator.
pub fn create_with(path: &str, leaf: Value, separator: char) -> Value {
    let mut obj = Object::new();
    match path.split_once(separator) {
        None => {
            obj.insert(path.to_owned(), leaf);
        }
        Some((head, rest)) => {
            obj.insert(head.to_owned(), create_with(rest, leaf, separator));
        }
    }
    Value::Object(obj)
}

/// Inserts `leaf` at `path`, merging into existing objects along the way.
/// A non-object receiver (or a non-object value met along the path) is
/// replaced by an empty object first.
pub fn put(value: &mut Value, path: &str, leaf: Value) {
    put_with(value, path, leaf, DEFAULT_SEPARATOR)
}

/// [`put`] with an explicit separator.
pub fn put_with(value: &mut Value, path: &str, leaf: Value, separator: char) {
    if !value.is_object() {
        *value = Value::object();
    }
    let Value::Object(obj) = value else {
        unreachable!("receiver was coerced to an object")
    };
    match path.split_once(separator) {
        None => {
            obj.insert(path.to_owned(), leaf);
        }
        Some((head, rest)) => match obj.get_mut(head) {
            Some(entry) => put_with(entry, rest, leaf, separator),
            None => {
                obj.insert(head.to_owned(), create_with(rest, leaf, separator));
            }
        },
    }
}
