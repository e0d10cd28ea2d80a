//! Recursive-descent JSON parser producing a [`Value`] tree.
//!
//! The grammar is RFC 8259 JSON extended with `//` line comments and
//! `/* */` block comments between tokens. Beyond that the parser is strict:
//! object keys must be non-empty quoted strings, a comma before the first
//! array element is an error, raw control characters inside string literals
//! are errors, and number tokens that overflow or fail to convert abort the
//! parse.
//!
//! Every failure carries the 1-based line and column where it was detected
//! (see [`DynjsonError::BadJson`]); the first error aborts the whole parse
//! with no partial tree.
//!
//! # Key behaviors
//!
//! - **Line counting**: CR-LF, bare CR, and bare LF each count as one line
//!   break, including inside comments.
//! - **Number tokens** are scanned greedily over `0-9 + - . e E` and then
//!   converted with `str::parse`; a token containing `.`, `e` or `E` becomes
//!   floating-point, anything else a 64-bit signed integer. Malformed
//!   interiors (`1.2.3`, `1e5e5`) and overflow are conversion errors.
//! - **`\uXXXX` escapes** decode a single 16-bit code unit; units that are
//!   not Unicode scalar values (lone surrogates) decode to U+FFFD.
//! - The parser never produces [`Value::Undefined`].

use crate::error::{DynjsonError, Result};
use crate::value::{Array, Object, Value};
use std::io::Read;

/// Parses a JSON document (with optional comments) into a [`Value`].
///
/// Parsing stops after the first complete top-level value; trailing text is
/// not diagnosed.
///
/// ```rust
/// use dynjson_core::parse;
///
/// let v = parse("// config\n{\"retries\": 3}").unwrap();
/// assert_eq!(v["retries"].as_i64().unwrap(), 3);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    Parser::new(input).parse_value()
}

/// Reads the stream to completion, then parses it. The input must be valid
/// UTF-8. Incremental parsing of partial input is out of scope; the caller
/// supplies a ready stream.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse(&buf)
}

/// Object parser state. `}` is legal while expecting a key or while
/// expecting a comma; a colon is only legal right after a key.
enum ObjectState {
    ExpectKeyOrClose,
    ExpectColon,
    ExpectCommaOrClose,
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// 0-based; reported 1-based.
    line: usize,
    /// Byte offset since the last line break; reported 1-based.
    col: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Parser<'a> {
        Parser {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            line: 0,
            col: 0,
        }
    }

    /// Lookahead without consuming; returns 0 past the end of input.
    fn peek(&self, offset: usize) -> u8 {
        self.bytes.get(self.pos + offset).copied().unwrap_or(0)
    }

    fn eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn bump(&mut self, n: usize) {
        self.pos += n;
        self.col += n;
    }

    fn mark_line_break(&mut self) {
        self.line += 1;
        self.col = 0;
    }

    fn err(&self, message: impl Into<String>) -> DynjsonError {
        DynjsonError::BadJson {
            line: self.line + 1,
            column: self.col + 1,
            message: message.into(),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_space_or_comment();
        if self.eof() {
            return Err(self.err("unexpected end of input"));
        }
        match self.peek(0) {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'"' => self.parse_string().map(Value::String),
            b't' => {
                self.expect_keyword("true")?;
                Ok(Value::Boolean(true))
            }
            b'f' => {
                self.expect_keyword("false")?;
                Ok(Value::Boolean(false))
            }
            b'n' => {
                self.expect_keyword("null")?;
                Ok(Value::Null)
            }
            c if is_number_part(c) => self.parse_number(),
            _ => Err(self.err("unexpected token")),
        }
    }

    fn expect_keyword(&mut self, word: &'static str) -> Result<()> {
        for (i, expected) in word.bytes().enumerate() {
            if self.peek(i) != expected {
                return Err(self.err("unexpected token"));
            }
        }
        self.bump(word.len());
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.bump(1); // {
        let mut obj = Object::new();
        let mut state = ObjectState::ExpectKeyOrClose;
        let mut key = String::new();
        loop {
            self.skip_space_or_comment();
            if self.eof() {
                return Err(self.err("unexpected end of input"));
            }
            let c = self.peek(0);
            match state {
                ObjectState::ExpectKeyOrClose => {
                    if c == b'}' {
                        self.bump(1);
                        return Ok(Value::Object(obj));
                    }
                    if c != b'"' {
                        return Err(self.err("expected object key or '}'"));
                    }
                    key = self.parse_string()?;
                    if key.is_empty() {
                        return Err(self.err("object key must not be empty"));
                    }
                    state = ObjectState::ExpectColon;
                }
                ObjectState::ExpectColon => {
                    if c != b':' {
                        return Err(self.err("expected ':' after object key"));
                    }
                    self.bump(1);
                    let value = self.parse_value()?;
                    // Repeated keys overwrite: last write wins.
                    obj.insert(std::mem::take(&mut key), value);
                    state = ObjectState::ExpectCommaOrClose;
                }
                ObjectState::ExpectCommaOrClose => {
                    if c == b'}' {
                        self.bump(1);
                        return Ok(Value::Object(obj));
                    }
                    if c != b',' {
                        return Err(self.err("expected ',' or '}'"));
                    }
                    self.bump(1);
                    state = ObjectState::ExpectKeyOrClose;
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.bump(1); // [
        let mut arr = Array::new();
        loop {
            self.skip_space_or_comment();
            if self.eof() {
                return Err(self.err("unexpected end of input"));
            }
            let c = self.peek(0);
            if c == b']' {
                self.bump(1);
                return Ok(Value::Array(arr));
            }
            if c == b',' {
                if arr.is_empty() {
                    return Err(self.err("unexpected ',' before first array element"));
                }
                self.bump(1);
            } else {
                arr.push(self.parse_value()?);
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.bump(1); // opening quote
        let mut out = String::new();
        let mut run_start = self.pos;
        loop {
            if self.eof() {
                return Err(self.err("unexpected end of input"));
            }
            match self.peek(0) {
                b'"' => {
                    out.push_str(&self.input[run_start..self.pos]);
                    self.bump(1);
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.input[run_start..self.pos]);
                    self.parse_escape(&mut out)?;
                    run_start = self.pos;
                }
                b'\r' | b'\n' | 0x08 | 0x0C | b'\t' => {
                    return Err(self.err("string literal cannot contain control characters"));
                }
                _ => self.bump(1),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        self.bump(1); // backslash
        if self.eof() {
            return Err(self.err("unexpected end of input"));
        }
        match self.peek(0) {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                self.bump(1);
                return self.parse_unicode_escape(out);
            }
            _ => return Err(self.err("invalid escape character")),
        }
        self.bump(1);
        Ok(())
    }

    /// Decodes the four hex digits of a `\uXXXX` escape into one 16-bit
    /// code unit, re-encoded as UTF-8 on the spot. Surrogate-pair
    /// combination is not performed; a lone surrogate unit is not a scalar
    /// value and decodes to U+FFFD.
    fn parse_unicode_escape(&mut self, out: &mut String) -> Result<()> {
        let mut unit: u16 = 0;
        for i in 0..4 {
            let digit = match self.peek(i) {
                c @ b'0'..=b'9' => c - b'0',
                c @ b'a'..=b'f' => c - b'a' + 10,
                c @ b'A'..=b'F' => c - b'A' + 10,
                _ => return Err(self.err("invalid unicode escape")),
            };
            unit = (unit << 4) | u16::from(digit);
        }
        self.bump(4);
        out.push(char::from_u32(u32::from(unit)).unwrap_or('\u{FFFD}'));
        Ok(())
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut is_float = false;
        while !self.eof() {
            let c = self.peek(0);
            if !is_number_part(c) {
                break;
            }
            if c == b'.' || c == b'e' || c == b'E' {
                is_float = true;
            }
            self.bump(1);
        }
        let token = &self.input[start..self.pos];
        if is_float {
            match token.parse::<f64>() {
                Ok(v) => Ok(Value::FloatingPoint(v)),
                Err(e) => Err(self.err(format!("cannot convert \"{token}\" to a number ({e})"))),
            }
        } else {
            match token.parse::<i64>() {
                Ok(v) => Ok(Value::Integral(v)),
                Err(e) => Err(self.err(format!("cannot convert \"{token}\" to a number ({e})"))),
            }
        }
    }

    fn skip_space_or_comment(&mut self) {
        loop {
            let c1 = self.peek(0);
            let c2 = self.peek(1);
            if c1 == b'\r' && c2 == b'\n' {
                self.bump(2);
                self.mark_line_break();
            } else if c1 == b'\r' || c1 == b'\n' {
                self.bump(1);
                self.mark_line_break();
            } else if !self.eof() && c1.is_ascii_whitespace() {
                self.bump(1);
            } else if c1 == b'/' && c2 == b'*' {
                self.skip_block_comment();
            } else if c1 == b'/' && c2 == b'/' {
                self.skip_line_comment();
            } else {
                return;
            }
        }
    }

    /// Consumes `/* ... */`, or everything to EOF if unterminated.
    fn skip_block_comment(&mut self) {
        self.bump(2); // /*
        while !self.eof() {
            let c1 = self.peek(0);
            let c2 = self.peek(1);
            if c1 == b'\r' && c2 == b'\n' {
                self.bump(2);
                self.mark_line_break();
            } else if c1 == b'\r' || c1 == b'\n' {
                self.bump(1);
                self.mark_line_break();
            } else if c1 == b'*' && c2 == b'/' {
                self.bump(2);
                return;
            } else {
                self.bump(1);
            }
        }
    }

    /// Consumes `//` up to (but not including) the line break, so the outer
    /// loop counts it.
    fn skip_line_comment(&mut self) {
        self.bump(2); // //
        while !self.eof() {
            let c = self.peek(0);
            if c == b'\r' || c == b'\n' {
                return;
            }
            self.bump(1);
        }
    }
}

/// Characters the greedy number scanner consumes. `+` is admitted anywhere
/// in the run; `str::parse` decides validity afterwards.
fn is_number_part(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
}
