//! JSON text emitter for [`Value`] trees.
//!
//! Output is compact by default; [`serialize_indented`] inserts a newline
//! after every opening bracket and comma and indents each child line by
//! `depth` repetitions of the indent string. An empty indent string
//! degenerates to fully compact output.
//!
//! `Undefined` has no JSON token and serializes as `null`, matching the
//! `JSON.stringify` convention for absent values. Member order of objects
//! follows the map's iteration order and is unspecified.
//!
//! ```rust
//! use dynjson_core::{parse, serialize, serialize_indented};
//!
//! let v = parse(r#"{"aaa":1}"#).unwrap();
//! assert_eq!(serialize(&v), r#"{"aaa":1}"#);
//! assert_eq!(serialize_indented(&v, " "), "{\n \"aaa\": 1\n}");
//! ```

use crate::value::Value;

/// Renders a value as compact JSON text.
pub fn serialize(value: &Value) -> String {
    serialize_indented(value, "")
}

/// Renders a value as JSON text, indenting nested children with `indent`.
/// An empty `indent` produces compact output with no inserted whitespace.
pub fn serialize_indented(value: &Value, indent: &str) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent, 0);
    out
}

fn write_value(out: &mut String, value: &Value, indent: &str, depth: usize) {
    match value {
        // JSON has no token for undefined; both render as null.
        Value::Undefined | Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integral(n) => out.push_str(&n.to_string()),
        Value::FloatingPoint(f) => write_float(out, *f),
        Value::String(s) => write_string(out, s),
        Value::Array(arr) => {
            out.push('[');
            newline(out, indent);
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                    newline(out, indent);
                }
                pad(out, indent, depth + 1);
                write_value(out, item, indent, depth + 1);
            }
            newline(out, indent);
            pad(out, indent, depth);
            out.push(']');
        }
        Value::Object(obj) => {
            out.push('{');
            newline(out, indent);
            for (i, (key, item)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                    newline(out, indent);
                }
                pad(out, indent, depth + 1);
                write_string(out, key);
                out.push(':');
                if !indent.is_empty() {
                    out.push(' ');
                }
                write_value(out, item, indent, depth + 1);
            }
            newline(out, indent);
            pad(out, indent, depth);
            out.push('}');
        }
    }
}

/// Floats use the shortest representation that reparses to the same value
/// and keeps the floating kind (`1.0`, not `1`). Non-finite values have no
/// JSON form and render as null.
fn write_float(out: &mut String, f: f64) {
    if f.is_finite() {
        out.push_str(&format!("{f:?}"));
    } else {
        out.push_str("null");
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn newline(out: &mut String, indent: &str) {
    if !indent.is_empty() {
        out.push('\n');
    }
}

fn pad(out: &mut String, indent: &str, depth: usize) {
    if !indent.is_empty() {
        for _ in 0..depth {
            out.push_str(indent);
        }
    }
}
