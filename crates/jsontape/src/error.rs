//! Position-tagged decoding failures.

use thiserror::Error;

/// A failure raised by either decoding stage.
///
/// The `index` is a 0-based character offset into the exact source string
/// that was scanned, suitable for caret-style diagnostics. The first failure
/// aborts the whole scan or parse; no partial results are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at index {index}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Character offset of the offending input.
    pub index: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// The two failure domains, lexical and structural, in one closed enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No token can start with this character.
    #[error("invalid token")]
    InvalidToken,
    /// A control character appeared unescaped inside a string literal.
    #[error("invalid character (use '\\u{0:04x}')")]
    UnescapedControl(u32),
    /// The character after `\` does not open a valid escape.
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,
    /// A `\u` escape was not followed by four hex digits encoding a scalar
    /// value.
    #[error("invalid Unicode escape sequence")]
    InvalidUnicodeEscape,
    /// A number phase required a digit and did not get one.
    #[error("expected a digit")]
    ExpectedDigit,
    /// A literal name (`true`, `false`, `null`) broke off before completion.
    #[error("expected '{expected}' (to complete the literal name \"{literal}\")")]
    IncompleteLiteral {
        /// The character the matcher expected next.
        expected: char,
        /// The literal name being matched.
        literal: &'static str,
    },
    /// Input ended while a compound token was still open.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A value was required and something else (or nothing) was found.
    #[error("expected a value")]
    ExpectedValue,
    /// An object member name was not a string.
    #[error("invalid name (must be a string)")]
    InvalidName,
    /// An object member name was not followed by `:`.
    #[error("expected a colon")]
    ExpectedColon,
    /// An object member value was not followed by `,` or `}`.
    #[error("expected a comma or '}}'")]
    ExpectedCommaOrEndObject,
    /// An array element was not followed by `,` or `]`.
    #[error("expected a comma or ']'")]
    ExpectedCommaOrEndArray,
    /// The token sequence ended inside an object.
    #[error("incomplete object")]
    IncompleteObject,
    /// The token sequence ended inside an array.
    #[error("incomplete array")]
    IncompleteArray,
    /// Tokens remained after the top-level value.
    #[error("trailing data")]
    TrailingData,
}
