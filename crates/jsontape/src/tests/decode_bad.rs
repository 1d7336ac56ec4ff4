use rstest::rstest;

use crate::{ErrorKind, decode};

#[rstest]
#[case("", ErrorKind::ExpectedValue, 0)]
#[case("   ", ErrorKind::ExpectedValue, 0)]
#[case("@", ErrorKind::InvalidToken, 0)]
#[case("[1, @]", ErrorKind::InvalidToken, 4)]
#[case("-x", ErrorKind::ExpectedDigit, 1)]
#[case("1.x", ErrorKind::ExpectedDigit, 2)]
#[case("1e!", ErrorKind::ExpectedDigit, 2)]
#[case("1e-", ErrorKind::UnexpectedEndOfInput, 3)]
#[case("\"abc", ErrorKind::UnexpectedEndOfInput, 4)]
#[case("\"\\q\"", ErrorKind::InvalidEscapeSequence, 2)]
#[case("\"\\u12G4\"", ErrorKind::InvalidUnicodeEscape, 5)]
#[case("\"a\nb\"", ErrorKind::UnescapedControl(0x0A), 2)]
fn lexical_errors_point_at_the_first_bad_character(
    #[case] src: &str,
    #[case] kind: ErrorKind,
    #[case] index: usize,
) {
    let err = decode(src).expect_err("decode should have failed");
    assert_eq!(err.kind, kind, "for {src:?}");
    assert_eq!(err.index, index, "for {src:?}");
}

#[rstest]
#[case("{", ErrorKind::IncompleteObject, 0)]
#[case("{\"a\"", ErrorKind::ExpectedColon, 3)]
#[case("{\"a\" 1}", ErrorKind::ExpectedColon, 6)]
#[case("{1: 2}", ErrorKind::InvalidName, 2)]
#[case("[1,]", ErrorKind::ExpectedValue, 3)]
#[case("[1", ErrorKind::IncompleteArray, 2)]
#[case("[1 2]", ErrorKind::ExpectedCommaOrEndArray, 4)]
#[case("]", ErrorKind::ExpectedValue, 0)]
#[case("1 2", ErrorKind::TrailingData, 3)]
#[case("0123", ErrorKind::TrailingData, 4)]
fn structural_errors_point_at_the_offending_token(
    #[case] src: &str,
    #[case] kind: ErrorKind,
    #[case] index: usize,
) {
    let err = decode(src).expect_err("decode should have failed");
    assert_eq!(err.kind, kind, "for {src:?}");
    assert_eq!(err.index, index, "for {src:?}");
}

#[test]
fn literal_cut_short_names_the_missing_character() {
    let err = decode("tru").expect_err("decode should have failed");
    assert_eq!(err.kind, ErrorKind::IncompleteLiteral {
        expected: 'e',
        literal: "true",
    });
    assert_eq!(err.index, 3);
    assert_eq!(
        err.to_string(),
        "expected 'e' (to complete the literal name \"true\") at index 3"
    );
}

#[test]
fn errors_render_their_index_for_diagnostics() {
    let err = decode("[nulL]").expect_err("decode should have failed");
    assert_eq!(err.index, 4);
    assert_eq!(
        err.to_string(),
        "expected 'l' (to complete the literal name \"null\") at index 4"
    );
}
