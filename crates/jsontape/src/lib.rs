//! A two-stage, from-scratch JSON decoder.
//!
//! Decoding runs as a strictly one-directional pipeline: characters feed a
//! resumable lexical scanner that produces a positioned [`Token`] sequence,
//! and a recursive-descent parser turns the finished sequence into a
//! [`Value`] tree. The stages are independent — [`scan`] runs to completion
//! without a parser attached, so token sequences can be inspected, buffered,
//! or replayed — and both report failures as a [`ParseError`] carrying a
//! character index into the original source.
//!
//! # Examples
//!
//! ```rust
//! use jsontape::{decode, Value};
//!
//! let value = decode(r#"{"key": [null, true, 3.5]}"#).unwrap();
//! assert!(value.is_object());
//! ```
//!
//! The accepted grammar is JSON as defined by [RFC 8259]: strings forbid
//! unescaped control characters, Unicode escapes take exactly four hex
//! digits, and numbers take an optional sign, fraction, and exponent.
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

mod error;
mod escape_buffer;
mod literal_buffer;
mod parser;
mod scanner;
mod token;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError};
pub use parser::parse;
pub use scanner::scan;
pub use token::{Token, TokenContent};
pub use value::{Array, Map, Value};

/// Decodes a complete JSON text into a [`Value`].
///
/// Convenience composition of [`scan`] and [`parse`].
///
/// # Errors
///
/// Returns the first lexical or structural error encountered, positioned at
/// a character index into `source`.
///
/// # Examples
///
/// ```
/// use jsontape::{decode, Value};
///
/// assert_eq!(decode("[1, 2]").unwrap(), Value::Array(vec![
///     Value::Number(1.0),
///     Value::Number(2.0),
/// ]));
/// ```
pub fn decode(source: &str) -> Result<Value, ParseError> {
    parse(&scan(source)?)
}
