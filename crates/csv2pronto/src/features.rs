//! Parser for the `features` column.
//!
//! The scraper stored each listing's feature map as a Python dict literal:
//!
//! ```text
//! {'Pileta': 'Si', 'Cochera': 1, 'Apto profesional': True, 'Expensas': None}
//! ```
//!
//! Any Python literal may appear as a value: strings with the usual escapes
//! (`\xa0`, `\u00e9`, octal, ...), numbers, `True`, `False`, `None`, and
//! lists, tuples, sets or dicts of those. String values are stored as they
//! decode; everything else is rendered as Python's `repr` would print it, so
//! `1` stays `1`, `True` stays `True` and `[1, 2]` stays `[1, 2]`. A JSON
//! object is accepted as well.

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureBlobError {
    #[error("expected {expected} at offset {offset}")]
    Expected { expected: &'static str, offset: usize },

    #[error("unterminated string starting at offset {0}")]
    UnterminatedString(usize),

    #[error("unknown escape sequence \\{escape} at offset {offset}")]
    UnknownEscape { escape: char, offset: usize },

    #[error("unsupported value {0:?}")]
    Unsupported(String),

    #[error("unhashable dict key {0}")]
    UnhashableKey(String),

    #[error("trailing characters after offset {0}")]
    Trailing(usize),
}

/// Parse a feature blob into `(name, value)` pairs, keeping their order.
pub fn parse(blob: &str) -> Result<Vec<(String, String)>, FeatureBlobError> {
    let root = match serde_json::from_str::<serde_json::Value>(blob) {
        Ok(json) => Value::from(json),
        Err(_) => Parser::new(blob).document()?,
    };
    match root {
        Value::Dict(entries) => Ok(entries
            .into_iter()
            .map(|(k, v)| (k.into_text(), v.into_text()))
            .collect()),
        _ => Err(FeatureBlobError::Expected {
            expected: "a dict",
            offset: 0,
        }),
    }
}

/// A Python literal.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Str(String),
    /// Numeric token as written.
    Number(String),
    Bool(bool),
    None,
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Set(Vec<Value>),
    Dict(Vec<(Value, Value)>),
}

impl Value {
    /// Strings as they decode, anything else as its `repr`.
    fn into_text(self) -> String {
        match self {
            Value::Str(s) => s,
            other => {
                let mut out = String::new();
                other.repr(&mut out);
                out
            }
        }
    }

    fn repr(&self, out: &mut String) {
        match self {
            Value::Str(s) => repr_str(s, out),
            Value::Number(n) => out.push_str(n),
            Value::Bool(true) => out.push_str("True"),
            Value::Bool(false) => out.push_str("False"),
            Value::None => out.push_str("None"),
            Value::List(items) => repr_seq(items, "[", "]", out),
            Value::Tuple(items) if items.len() == 1 => {
                out.push('(');
                items[0].repr(out);
                out.push_str(",)");
            }
            Value::Tuple(items) => repr_seq(items, "(", ")", out),
            Value::Set(items) => repr_seq(items, "{", "}", out),
            Value::Dict(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    key.repr(out);
                    out.push_str(": ");
                    value.repr(out);
                }
                out.push('}');
            }
        }
    }

    fn is_hashable(&self) -> bool {
        match self {
            Value::List(_) | Value::Set(_) | Value::Dict(_) => false,
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            _ => true,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::None,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.to_string()),
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Dict(
                map.into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn repr_seq(items: &[Value], open: &str, close: &str, out: &mut String) {
    out.push_str(open);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.repr(out);
    }
    out.push_str(close);
}

/// Python's quoting: single quotes unless the text holds only `'`.
fn repr_str(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let n = c as u32;
                if n <= 0xff {
                    out.push_str(&format!("\\x{n:02x}"));
                } else if n <= 0xffff {
                    out.push_str(&format!("\\u{n:04x}"));
                } else {
                    out.push_str(&format!("\\U{n:08x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            offset: 0,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    fn peek_is(&mut self, ch: char) -> bool {
        self.chars.peek() == Some(&ch)
    }

    fn skip_ws(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    fn expect(&mut self, ch: char, expected: &'static str) -> Result<(), FeatureBlobError> {
        self.skip_ws();
        if self.peek_is(ch) {
            self.bump();
            Ok(())
        } else {
            Err(FeatureBlobError::Expected {
                expected,
                offset: self.offset,
            })
        }
    }

    /// A whole blob: one dict literal and nothing after it.
    fn document(mut self) -> Result<Value, FeatureBlobError> {
        self.skip_ws();
        if !self.peek_is('{') {
            return Err(FeatureBlobError::Expected {
                expected: "'{'",
                offset: self.offset,
            });
        }
        let root = self.value()?;
        self.skip_ws();
        if self.chars.peek().is_some() {
            return Err(FeatureBlobError::Trailing(self.offset));
        }
        Ok(root)
    }

    fn value(&mut self) -> Result<Value, FeatureBlobError> {
        self.skip_ws();
        match self.chars.peek().copied() {
            Some(q @ ('\'' | '"')) => self.string(q).map(Value::Str),
            Some('[') => {
                self.bump();
                let (items, _) = self.sequence(Vec::new(), ']')?;
                Ok(Value::List(items))
            }
            Some('(') => {
                self.bump();
                let (mut items, trailing_comma) = self.sequence(Vec::new(), ')')?;
                if items.len() == 1 && !trailing_comma {
                    // Parenthesised expression, not a tuple.
                    Ok(items.remove(0))
                } else {
                    Ok(Value::Tuple(items))
                }
            }
            Some('{') => self.braces(),
            Some(c) if c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.') => self.bare(),
            _ => Err(FeatureBlobError::Expected {
                expected: "a value",
                offset: self.offset,
            }),
        }
    }

    /// Comma-separated values up to `close`. `items` may already hold the
    /// first value. Also reports whether the last value had a trailing comma.
    fn sequence(
        &mut self,
        mut items: Vec<Value>,
        close: char,
    ) -> Result<(Vec<Value>, bool), FeatureBlobError> {
        let mut expect_value = items.is_empty();
        loop {
            self.skip_ws();
            if expect_value {
                if self.peek_is(close) {
                    self.bump();
                    let trailing_comma = !items.is_empty();
                    return Ok((items, trailing_comma));
                }
                items.push(self.value()?);
                expect_value = false;
            } else {
                let offset = self.offset;
                match self.bump() {
                    Some(',') => expect_value = true,
                    Some(c) if c == close => return Ok((items, false)),
                    _ => {
                        return Err(FeatureBlobError::Expected {
                            expected: "',' or a closing bracket",
                            offset,
                        })
                    }
                }
            }
        }
    }

    /// `{...}`: a dict, or a set when the first element has no `:`.
    fn braces(&mut self) -> Result<Value, FeatureBlobError> {
        self.bump();
        self.skip_ws();
        if self.peek_is('}') {
            self.bump();
            return Ok(Value::Dict(Vec::new()));
        }

        let first = self.value()?;
        self.skip_ws();
        if !self.peek_is(':') {
            let (items, _) = self.sequence(vec![first], '}')?;
            return Ok(Value::Set(items));
        }

        let mut entries = Vec::new();
        let mut key = first;
        loop {
            if !key.is_hashable() {
                return Err(FeatureBlobError::UnhashableKey(key.into_text()));
            }
            self.expect(':', "':'")?;
            let value = self.value()?;
            entries.push((key, value));

            self.skip_ws();
            let offset = self.offset;
            match self.bump() {
                Some(',') => {
                    self.skip_ws();
                    if self.peek_is('}') {
                        self.bump();
                        break;
                    }
                    key = self.value()?;
                }
                Some('}') => break,
                _ => {
                    return Err(FeatureBlobError::Expected {
                        expected: "',' or '}'",
                        offset,
                    })
                }
            }
        }
        Ok(Value::Dict(entries))
    }

    fn string(&mut self, quote: char) -> Result<String, FeatureBlobError> {
        let start = self.offset;
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(FeatureBlobError::UnterminatedString(start)),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => {
                    if let Some(c) = self.escape(start)? {
                        out.push(c);
                    }
                }
                Some(c) => out.push(c),
            }
        }
    }

    /// Decode the escape after a backslash. A backslash before a newline
    /// continues the line and yields nothing.
    fn escape(&mut self, start: usize) -> Result<Option<char>, FeatureBlobError> {
        let offset = self.offset;
        let c = match self.bump() {
            None => return Err(FeatureBlobError::UnterminatedString(start)),
            Some('\n') => return Ok(None),
            Some(c @ ('\\' | '\'' | '"')) => c,
            Some('a') => '\x07',
            Some('b') => '\x08',
            Some('f') => '\x0c',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('v') => '\x0b',
            Some(d @ '0'..='7') => self.octal(d, offset)?,
            Some('x') => self.hex(2, offset)?,
            Some('u') => self.hex(4, offset)?,
            Some('U') => self.hex(8, offset)?,
            Some(other) => {
                return Err(FeatureBlobError::UnknownEscape {
                    escape: other,
                    offset,
                })
            }
        };
        Ok(Some(c))
    }

    /// Up to three octal digits, the first already consumed.
    fn octal(&mut self, first: char, offset: usize) -> Result<char, FeatureBlobError> {
        let mut code = first.to_digit(8).unwrap_or(0);
        for _ in 0..2 {
            match self.chars.peek().and_then(|c| c.to_digit(8)) {
                Some(d) => {
                    code = code * 8 + d;
                    self.bump();
                }
                None => break,
            }
        }
        char::from_u32(code).ok_or(FeatureBlobError::Expected {
            expected: "an octal escape",
            offset,
        })
    }

    /// Exactly `digits` hex digits naming a Unicode scalar value.
    fn hex(&mut self, digits: usize, offset: usize) -> Result<char, FeatureBlobError> {
        let invalid = FeatureBlobError::Expected {
            expected: "hex digits of a Unicode scalar value",
            offset,
        };
        let mut code: u32 = 0;
        for _ in 0..digits {
            let digit = self.bump().and_then(|c| c.to_digit(16)).ok_or(invalid.clone())?;
            code = code.checked_mul(16).ok_or(invalid.clone())? + digit;
        }
        char::from_u32(code).ok_or(invalid)
    }

    fn bare(&mut self) -> Result<Value, FeatureBlobError> {
        let mut token = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.' | '_') {
                token.push(c);
                self.bump();
            } else {
                break;
            }
        }

        match token.as_str() {
            "True" => Ok(Value::Bool(true)),
            "False" => Ok(Value::Bool(false)),
            "None" => Ok(Value::None),
            _ if token.parse::<f64>().is_ok_and(f64::is_finite) => Ok(Value::Number(token)),
            _ => Err(FeatureBlobError::Unsupported(token)),
        }
    }
}
