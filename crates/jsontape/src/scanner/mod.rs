//! The character-driven lexical scanner.
//!
//! The scanner is a finite-state machine held as data: [`ScanState`] is a
//! closed enum with one variant per lexer mode, and [`ScanState::step`] is a
//! pure function of (state, character, index) that returns the next state and
//! appends any tokens recognized by the transition. [`scan`] is the ordinary
//! loop that drives the machine over a complete source string.
//!
//! Because each step is a discrete unit, partial progress is fully
//! inspectable: tests can feed characters one at a time and check the
//! intermediate state between any two of them.

use crate::{
    error::{ErrorKind, ParseError},
    escape_buffer::{Feed, UnicodeEscapeBuffer},
    literal_buffer::{LiteralMatcher, Step as LiteralStep},
    token::{Token, TokenContent},
};

/// Lexes a complete JSON text into its token sequence.
///
/// Fails with a [`ParseError`] naming the index of the first character that
/// cannot extend the current state, or the end of input if a compound token
/// is left open.
///
/// # Errors
///
/// Returns the first lexical error encountered; nothing is recovered.
///
/// # Examples
///
/// ```
/// use jsontape::{scan, TokenContent};
///
/// let tokens = scan("[true]").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].content, TokenContent::Boolean(true));
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut state = ScanState::Idle;
    let mut end = 0;

    for (index, c) in source.chars().enumerate() {
        state = state.step(c, index, &mut tokens)?;
        end = index + 1;
    }
    state.finish(end, &mut tokens)?;

    Ok(tokens)
}

/// The scanner's current mode.
///
/// Each variant owns exactly the partial data needed to resume after the next
/// character; a step consumes the state and returns its successor. Number
/// phases carry their pieces separately (integer magnitude, fractional
/// numerator/denominator, exponent and signs) so nothing is rounded before
/// the final combination.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScanState {
    /// Between tokens, ready for any value start.
    Idle,
    /// Inside a string literal's body.
    String { buf: String },
    /// Just consumed the `\` of an escape sequence.
    StringEscape { buf: String },
    /// Inside the four hex digits of a `\u` escape.
    StringUnicodeEscape {
        buf: String,
        escape: UnicodeEscapeBuffer,
    },
    /// Just consumed a leading `-`.
    Minus,
    /// Inside the integer part of a number.
    Integer { magnitude: f64, sign: f64 },
    /// Just consumed the decimal point; a fractional digit is mandatory.
    DecimalPoint { integer: f64, sign: f64 },
    /// Inside the fractional digits.
    Fraction {
        integer: f64,
        sign: f64,
        numer: f64,
        denom: f64,
    },
    /// Just consumed `e` or `E`; a digit or a sign is mandatory.
    ExponentMarker { mantissa: f64, sign: f64 },
    /// Just consumed the exponent's sign; a digit is mandatory.
    ExponentSign {
        mantissa: f64,
        sign: f64,
        exp_sign: f64,
    },
    /// Inside the exponent's digits.
    ExponentDigits {
        mantissa: f64,
        sign: f64,
        exponent: f64,
        exp_sign: f64,
    },
    /// Matching the remainder of `true`, `false`, or `null`.
    Literal { matcher: LiteralMatcher },
}

impl ScanState {
    /// Advances the machine by one character.
    ///
    /// Returns the successor state, pushing any tokens the transition
    /// recognized onto `tokens`, or the positioned error for a character that
    /// cannot extend this state.
    pub(crate) fn step(
        self,
        c: char,
        index: usize,
        tokens: &mut Vec<Token>,
    ) -> Result<Self, ParseError> {
        match self {
            ScanState::Idle => Self::start(c, index, tokens),

            ScanState::String { mut buf } => match c {
                '"' => {
                    tokens.push(Token::new(TokenContent::String(buf), index));
                    Ok(ScanState::Idle)
                }
                '\\' => Ok(ScanState::StringEscape { buf }),
                c if (c as u32) < 0x20 => {
                    Err(ParseError::new(ErrorKind::UnescapedControl(c as u32), index))
                }
                c => {
                    buf.push(c);
                    Ok(ScanState::String { buf })
                }
            },

            ScanState::StringEscape { mut buf } => match c {
                '"' | '\\' | '/' => {
                    buf.push(c);
                    Ok(ScanState::String { buf })
                }
                'b' => {
                    buf.push('\u{0008}');
                    Ok(ScanState::String { buf })
                }
                'f' => {
                    buf.push('\u{000C}');
                    Ok(ScanState::String { buf })
                }
                'n' => {
                    buf.push('\n');
                    Ok(ScanState::String { buf })
                }
                'r' => {
                    buf.push('\r');
                    Ok(ScanState::String { buf })
                }
                't' => {
                    buf.push('\t');
                    Ok(ScanState::String { buf })
                }
                'u' => Ok(ScanState::StringUnicodeEscape {
                    buf,
                    escape: UnicodeEscapeBuffer::new(),
                }),
                _ => Err(ParseError::new(ErrorKind::InvalidEscapeSequence, index)),
            },

            ScanState::StringUnicodeEscape { mut buf, escape } => match escape.feed(c) {
                Some(Feed::Incomplete(escape)) => {
                    Ok(ScanState::StringUnicodeEscape { buf, escape })
                }
                Some(Feed::Complete(decoded)) => {
                    buf.push(decoded);
                    Ok(ScanState::String { buf })
                }
                None => Err(ParseError::new(ErrorKind::InvalidUnicodeEscape, index)),
            },

            ScanState::Minus => match c {
                '0'..='9' => Ok(ScanState::Integer {
                    magnitude: digit_value(c),
                    sign: -1.0,
                }),
                _ => Err(ParseError::new(ErrorKind::ExpectedDigit, index)),
            },

            ScanState::Integer { magnitude, sign } => match c {
                '0'..='9' => Ok(ScanState::Integer {
                    magnitude: magnitude * 10.0 + digit_value(c),
                    sign,
                }),
                '.' => Ok(ScanState::DecimalPoint {
                    integer: magnitude,
                    sign,
                }),
                'e' | 'E' => Ok(ScanState::ExponentMarker {
                    mantissa: magnitude,
                    sign,
                }),
                c => Self::emit_number(sign * magnitude, c, index, tokens),
            },

            ScanState::DecimalPoint { integer, sign } => match c {
                '0'..='9' => Ok(ScanState::Fraction {
                    integer,
                    sign,
                    numer: digit_value(c),
                    denom: 10.0,
                }),
                _ => Err(ParseError::new(ErrorKind::ExpectedDigit, index)),
            },

            ScanState::Fraction {
                integer,
                sign,
                numer,
                denom,
            } => match c {
                '0'..='9' => Ok(ScanState::Fraction {
                    integer,
                    sign,
                    numer: numer * 10.0 + digit_value(c),
                    denom: denom * 10.0,
                }),
                'e' | 'E' => Ok(ScanState::ExponentMarker {
                    mantissa: integer + numer / denom,
                    sign,
                }),
                c => Self::emit_number(sign * (integer + numer / denom), c, index, tokens),
            },

            ScanState::ExponentMarker { mantissa, sign } => match c {
                '0'..='9' => Ok(ScanState::ExponentDigits {
                    mantissa,
                    sign,
                    exponent: digit_value(c),
                    exp_sign: 1.0,
                }),
                '+' => Ok(ScanState::ExponentSign {
                    mantissa,
                    sign,
                    exp_sign: 1.0,
                }),
                '-' => Ok(ScanState::ExponentSign {
                    mantissa,
                    sign,
                    exp_sign: -1.0,
                }),
                _ => Err(ParseError::new(ErrorKind::ExpectedDigit, index)),
            },

            ScanState::ExponentSign {
                mantissa,
                sign,
                exp_sign,
            } => match c {
                '0'..='9' => Ok(ScanState::ExponentDigits {
                    mantissa,
                    sign,
                    exponent: digit_value(c),
                    exp_sign,
                }),
                _ => Err(ParseError::new(ErrorKind::ExpectedDigit, index)),
            },

            ScanState::ExponentDigits {
                mantissa,
                sign,
                exponent,
                exp_sign,
            } => match c {
                '0'..='9' => Ok(ScanState::ExponentDigits {
                    mantissa,
                    sign,
                    exponent: exponent * 10.0 + digit_value(c),
                    exp_sign,
                }),
                c => Self::emit_number(
                    sign * mantissa * 10f64.powf(exp_sign * exponent),
                    c,
                    index,
                    tokens,
                ),
            },

            ScanState::Literal { matcher } => match matcher.step(c) {
                LiteralStep::NeedMore(matcher) => Ok(ScanState::Literal { matcher }),
                LiteralStep::Done(content) => {
                    tokens.push(Token::new(content, index));
                    Ok(ScanState::Idle)
                }
                LiteralStep::Mismatch { expected, literal } => Err(ParseError::new(
                    ErrorKind::IncompleteLiteral { expected, literal },
                    index,
                )),
            },
        }
    }

    /// The at-rest transition: dispatches on a value's first character.
    fn start(c: char, index: usize, tokens: &mut Vec<Token>) -> Result<Self, ParseError> {
        match c {
            ' ' | '\t' | '\n' | '\r' => Ok(ScanState::Idle),
            '{' | '}' | '[' | ']' | ':' | ',' => {
                let content = match c {
                    '{' => TokenContent::BeginObject,
                    '}' => TokenContent::EndObject,
                    '[' => TokenContent::BeginArray,
                    ']' => TokenContent::EndArray,
                    ':' => TokenContent::PairSeparator,
                    _ => TokenContent::ListSeparator,
                };
                tokens.push(Token::new(content, index));
                Ok(ScanState::Idle)
            }
            '"' => Ok(ScanState::String { buf: String::new() }),
            // a leading zero closes immediately; JSON forbids digits after it
            '0' => {
                tokens.push(Token::new(TokenContent::Number(0.0), index));
                Ok(ScanState::Idle)
            }
            '1'..='9' => Ok(ScanState::Integer {
                magnitude: digit_value(c),
                sign: 1.0,
            }),
            '-' => Ok(ScanState::Minus),
            c => match LiteralMatcher::new(c) {
                Some(matcher) => Ok(ScanState::Literal { matcher }),
                None => Err(ParseError::new(ErrorKind::InvalidToken, index)),
            },
        }
    }

    /// Emits the finished number token, then re-processes the terminating
    /// character exactly as if it had arrived at rest. Shared by every
    /// number-terminating state so terminators that are themselves tokens
    /// (structural markers, a quote, a fresh `-`, a literal's first letter)
    /// are handled in one place.
    fn emit_number(
        value: f64,
        c: char,
        index: usize,
        tokens: &mut Vec<Token>,
    ) -> Result<Self, ParseError> {
        tokens.push(Token::new(TokenContent::Number(value), index));
        Self::start(c, index, tokens)
    }

    /// Closes the machine at end of input.
    ///
    /// A complete number phase flushes its pending token, since the end of
    /// input is a valid number boundary. Every other non-idle state is an
    /// unterminated compound and fails; an unfinished literal name reports
    /// the character it was still expecting.
    pub(crate) fn finish(self, end: usize, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        match self {
            ScanState::Idle => Ok(()),
            ScanState::Integer { magnitude, sign } => {
                tokens.push(Token::new(TokenContent::Number(sign * magnitude), end));
                Ok(())
            }
            ScanState::Fraction {
                integer,
                sign,
                numer,
                denom,
            } => {
                tokens.push(Token::new(
                    TokenContent::Number(sign * (integer + numer / denom)),
                    end,
                ));
                Ok(())
            }
            ScanState::ExponentDigits {
                mantissa,
                sign,
                exponent,
                exp_sign,
            } => {
                tokens.push(Token::new(
                    TokenContent::Number(sign * mantissa * 10f64.powf(exp_sign * exponent)),
                    end,
                ));
                Ok(())
            }
            ScanState::Literal { matcher } => Err(ParseError::new(
                ErrorKind::IncompleteLiteral {
                    expected: matcher.expected(),
                    literal: matcher.name(),
                },
                end,
            )),
            ScanState::String { .. }
            | ScanState::StringEscape { .. }
            | ScanState::StringUnicodeEscape { .. }
            | ScanState::Minus
            | ScanState::DecimalPoint { .. }
            | ScanState::ExponentMarker { .. }
            | ScanState::ExponentSign { .. } => {
                Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, end))
            }
        }
    }
}

fn digit_value(c: char) -> f64 {
    f64::from(c as u32 - '0' as u32)
}
