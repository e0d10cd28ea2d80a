//! Error types for value access and parsing.

use crate::value::Kind;
use thiserror::Error;

/// Errors produced by typed value access and by the deserializer.
///
/// All variants are recoverable: callers probing optional or ambiguously
/// typed data are expected to match on [`ValueIsUndefined`] and [`BadCast`]
/// locally, while [`BadJson`] is terminal for the current parse.
///
/// [`ValueIsUndefined`]: DynjsonError::ValueIsUndefined
/// [`BadCast`]: DynjsonError::BadCast
/// [`BadJson`]: DynjsonError::BadJson
#[derive(Error, Debug)]
pub enum DynjsonError {
    /// Typed access attempted on an undefined value.
    #[error("value is undefined")]
    ValueIsUndefined,

    /// Typed access whose requested type does not match (or numerically
    /// relate to) the stored kind.
    #[error("bad cast: {from} -> {to}")]
    BadCast { from: Kind, to: &'static str },

    /// Syntax or conversion error raised by the deserializer.
    /// `line` and `column` are 1-based.
    #[error("line({line}), col({column}): {message}")]
    BadJson {
        line: usize,
        column: usize,
        message: String,
    },

    /// Failure reading from a caller-supplied stream.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout dynjson-core.
pub type Result<T> = std::result::Result<T, DynjsonError>;
