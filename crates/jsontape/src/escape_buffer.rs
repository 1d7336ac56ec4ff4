//! Accumulator for four-digit Unicode escape sequences.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates up to four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) representing a code point and converts them to
//! a [`char`] once exactly four digits have been provided.
//!
//! Feeding a non-hexadecimal character, or completing a sequence that does not
//! encode a Unicode scalar value (a surrogate half), yields `None`; the caller
//! turns that into its own positioned error.

/// Result of feeding one character into a [`UnicodeEscapeBuffer`].
pub(crate) enum Feed {
    /// Fewer than four digits so far; keep feeding this buffer.
    Incomplete(UnicodeEscapeBuffer),
    /// All four digits consumed; the decoded character.
    Complete(char),
}

/// Buffer for the hex digits of a `\uXXXX` escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnicodeEscapeBuffer {
    value: u16,
    digits: u8,
}

impl UnicodeEscapeBuffer {
    /// Creates a new, empty buffer.
    pub fn new() -> Self {
        Self {
            value: 0,
            digits: 0,
        }
    }

    /// Feeds a single character, case-insensitively.
    ///
    /// Returns `None` if `c` is not a hex digit or if the completed code
    /// point is not a valid scalar value.
    pub fn feed(mut self, c: char) -> Option<Feed> {
        let digit = c.to_digit(16)?;
        self.value = self.value * 16 + u16::try_from(digit).ok()?;
        self.digits += 1;

        if self.digits == 4 {
            char::from_u32(u32::from(self.value)).map(Feed::Complete)
        } else {
            Some(Feed::Incomplete(self))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(digits: &str) -> Option<char> {
        let mut buf = UnicodeEscapeBuffer::new();
        for c in digits.chars() {
            match buf.feed(c)? {
                Feed::Incomplete(next) => buf = next,
                Feed::Complete(decoded) => return Some(decoded),
            }
        }
        None
    }

    #[test]
    fn basic_decoding() {
        assert_eq!(decode("0041"), Some('A'));
    }

    #[test]
    fn mixed_case_hex() {
        assert_eq!(decode("AbCd"), Some(char::from_u32(0xABCD).unwrap()));
    }

    #[test]
    fn invalid_hex_rejected() {
        assert_eq!(decode("00G1"), None);
    }

    #[test]
    fn surrogate_half_rejected() {
        // D800 is a high surrogate, not a scalar value
        assert_eq!(decode("D800"), None);
    }
}
