//! Recursive-descent parsing of a finished token sequence.
//!
//! The parser walks the scanner's output with one token of lookahead,
//! rebuilding nested structure and enforcing the separator/terminator
//! grammar. Errors reference the recorded character index of the offending
//! token or, when the sequence ends early, the index of the token that
//! should have preceded the missing one.

use crate::{
    error::{ErrorKind, ParseError},
    token::{Token, TokenContent},
    value::{Array, Map, Value},
};

/// Parses a complete token sequence into one JSON value.
///
/// # Errors
///
/// Fails with the first structural error, including `trailing data` if any
/// tokens remain after the top-level value.
///
/// # Examples
///
/// ```
/// use jsontape::{parse, scan, Value};
///
/// let tokens = scan("[null]").unwrap();
/// assert_eq!(parse(&tokens).unwrap(), Value::Array(vec![Value::Null]));
/// ```
pub fn parse(tokens: &[Token]) -> Result<Value, ParseError> {
    let (value, consumed) = parse_value(tokens, 0, 0)?;

    if let Some(extra) = tokens.get(consumed) {
        return Err(ParseError::new(ErrorKind::TrailingData, extra.index));
    }

    Ok(value)
}

/// Parses one value starting at token `index`.
///
/// Returns the value and the number of tokens it consumed. `anchor` is the
/// character index to blame when the sequence has no token at `index`.
fn parse_value(
    tokens: &[Token],
    index: usize,
    anchor: usize,
) -> Result<(Value, usize), ParseError> {
    let Some(token) = tokens.get(index) else {
        return Err(ParseError::new(ErrorKind::ExpectedValue, anchor));
    };

    match &token.content {
        TokenContent::BeginObject => {
            let (map, consumed) = parse_object(tokens, index + 1, token.index)?;
            Ok((Value::Object(map), consumed + 1))
        }
        TokenContent::BeginArray => {
            let (array, consumed) = parse_array(tokens, index + 1, token.index)?;
            Ok((Value::Array(array), consumed + 1))
        }
        TokenContent::EndObject
        | TokenContent::EndArray
        | TokenContent::PairSeparator
        | TokenContent::ListSeparator => {
            Err(ParseError::new(ErrorKind::ExpectedValue, token.index))
        }
        TokenContent::Null => Ok((Value::Null, 1)),
        TokenContent::Boolean(b) => Ok((Value::Boolean(*b), 1)),
        TokenContent::Number(n) => Ok((Value::Number(*n), 1)),
        TokenContent::String(s) => Ok((Value::String(s.clone()), 1)),
    }
}

/// Parses an object's members, starting just past the opening brace.
///
/// Consumption counts every token through the closing brace. A repeated key
/// keeps the later value.
fn parse_object(tokens: &[Token], start: usize, anchor: usize) -> Result<(Map, usize), ParseError> {
    let mut map = Map::new();
    let mut index = start;
    let mut anchor = anchor;

    loop {
        let Some(token) = tokens.get(index) else {
            return Err(ParseError::new(ErrorKind::IncompleteObject, anchor));
        };
        if matches!(token.content, TokenContent::EndObject) {
            return Ok((map, index + 1 - start));
        }

        let TokenContent::String(key) = &token.content else {
            return Err(ParseError::new(ErrorKind::InvalidName, token.index));
        };
        let key = key.clone();
        anchor = token.index;
        index += 1;

        let Some(token) = tokens.get(index) else {
            return Err(ParseError::new(ErrorKind::ExpectedColon, anchor));
        };
        if !matches!(token.content, TokenContent::PairSeparator) {
            return Err(ParseError::new(ErrorKind::ExpectedColon, token.index));
        }
        anchor = token.index;
        index += 1;

        let (value, consumed) = parse_value(tokens, index, anchor)?;
        map.insert(key, value);
        index += consumed;
        if let Some(last) = tokens.get(index - 1) {
            anchor = last.index;
        }

        let Some(token) = tokens.get(index) else {
            return Err(ParseError::new(ErrorKind::IncompleteObject, anchor));
        };
        match token.content {
            TokenContent::ListSeparator => {
                anchor = token.index;
                index += 1;
            }
            TokenContent::EndObject => return Ok((map, index + 1 - start)),
            _ => {
                return Err(ParseError::new(
                    ErrorKind::ExpectedCommaOrEndObject,
                    token.index,
                ));
            }
        }
    }
}

/// Parses an array's elements, starting just past the opening bracket.
///
/// Consumption counts every token through the closing bracket.
fn parse_array(
    tokens: &[Token],
    start: usize,
    anchor: usize,
) -> Result<(Array, usize), ParseError> {
    let mut array = Array::new();
    let mut index = start;
    let mut anchor = anchor;

    // only an immediate `]` closes an empty array; after any element a
    // separator must precede the next value
    if let Some(token) = tokens.get(index) {
        if matches!(token.content, TokenContent::EndArray) {
            return Ok((array, 1));
        }
    }

    loop {
        let (value, consumed) = parse_value(tokens, index, anchor)?;
        array.push(value);
        index += consumed;
        if let Some(last) = tokens.get(index - 1) {
            anchor = last.index;
        }

        let Some(token) = tokens.get(index) else {
            return Err(ParseError::new(ErrorKind::IncompleteArray, anchor));
        };
        match token.content {
            TokenContent::ListSeparator => {
                anchor = token.index;
                index += 1;
            }
            TokenContent::EndArray => return Ok((array, index + 1 - start)),
            _ => {
                return Err(ParseError::new(
                    ErrorKind::ExpectedCommaOrEndArray,
                    token.index,
                ));
            }
        }
    }
}
