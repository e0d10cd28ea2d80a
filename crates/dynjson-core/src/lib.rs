//! # dynjson-core
//!
//! A dynamically-typed JSON value tree for statically-typed Rust: one
//! [`Value`] enum holds numbers, strings, booleans, null, arrays, objects,
//! and an internal `Undefined` state, with type-safe access that surfaces
//! mismatches as recoverable errors instead of panics.
//!
//! The parser accepts RFC 8259 JSON extended with `//` and `/* */`
//! comments and reports 1-based line/column positions on failure. The
//! serializer emits compact or indented text. Dotted-path helpers navigate
//! and build nested objects.
//!
//! ## Quick start
//!
//! ```rust
//! use dynjson_core::{parse, path, serialize};
//!
//! let mut v = parse(r#"{"user":{"name":"Alice"}}"#).unwrap();
//! assert_eq!(v["user"]["name"].as_str().unwrap(), "Alice");
//!
//! // Mutable indexing vivifies missing structure...
//! v["user"]["age"] = 30.into();
//! // ...read-only indexing never does.
//! assert!(v["user"]["email"].is_undefined());
//!
//! assert_eq!(path::find(&v, "user.age").unwrap().as_i64().unwrap(), 30);
//! let text = serialize(&v);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` enum, typed accessors, index operators
//! - [`deserializer`] — JSON text → `Value` (`parse`, `parse_reader`)
//! - [`serializer`] — `Value` → JSON text (`serialize`, `serialize_indented`)
//! - [`path`] — dotted-path `find`/`create`/`put`
//! - [`error`] — error types for access and parse failures

pub mod deserializer;
pub mod error;
pub mod path;
pub mod serializer;
pub mod value;

pub use deserializer::{parse, parse_reader};
pub use error::{DynjsonError, Result};
pub use serializer::{serialize, serialize_indented};
pub use value::{Array, Kind, Object, Value};
