use rstest::rstest;

use crate::{Map, Value, decode};

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
#[case("0", Value::Number(0.0))]
#[case("\"\"", Value::String(String::new()))]
#[case("[]", Value::Array(vec![]))]
#[case("{}", Value::Object(Map::new()))]
fn atoms_decode(#[case] src: &str, #[case] expected: Value) {
    assert_eq!(decode(src).unwrap(), expected);
}

#[rstest]
#[case("0", 0.0)]
#[case("-7", -7.0)]
#[case("42", 42.0)]
#[case("3.14", 3.14)]
#[case("-12.5e2", -1250.0)]
#[case("1e3", 1000.0)]
#[case("1e+2", 100.0)]
#[case("25E-2", 0.25)]
#[case("0.5", 0.5)]
fn numbers_decode_within_float_precision(#[case] src: &str, #[case] expected: f64) {
    let Value::Number(n) = decode(src).unwrap() else {
        panic!("expected a number for {src:?}");
    };
    assert!((n - expected).abs() < 1e-9, "{src:?} decoded to {n}");
}

#[rstest]
#[case(r#""a\nb""#, "a\nb")]
#[case("\"\\u0041\"", "A")]
#[case(r#""say \"hi\"""#, "say \"hi\"")]
#[case(r#""tab\there""#, "tab\there")]
#[case(r#""héllo""#, "héllo")]
fn strings_decode_their_escapes(#[case] src: &str, #[case] expected: &str) {
    assert_eq!(decode(src).unwrap(), Value::String(expected.into()));
}

#[test]
fn structure_and_key_order_survive() {
    let Value::Object(map) = decode(r#"{"a": 1, "b": [true, false, null]}"#).unwrap() else {
        panic!("expected an object");
    };
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(map["a"], Value::Number(1.0));
    assert_eq!(
        map["b"],
        Value::Array(vec![
            Value::Boolean(true),
            Value::Boolean(false),
            Value::Null,
        ])
    );
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    let bare = decode(r#"{"a":[1,2],"b":{"c":null}}"#).unwrap();
    let padded = decode(
        " \t{ \"a\" :\r\n [ 1 , 2 ] ,\n \"b\" : { \"c\" : null } } \n",
    )
    .unwrap();
    assert_eq!(bare, padded);
}

#[test]
fn deeply_nested_containers_decode() {
    let value = decode("[[[[[1]]]]]").unwrap();
    let mut current = &value;
    for _ in 0..5 {
        let Value::Array(items) = current else {
            panic!("expected an array");
        };
        assert_eq!(items.len(), 1);
        current = &items[0];
    }
    assert_eq!(*current, Value::Number(1.0));
}

#[test]
fn mixed_array_keeps_element_order() {
    assert_eq!(
        decode(r#"[0, "one", 2.5, null, true]"#).unwrap(),
        Value::Array(vec![
            Value::Number(0.0),
            Value::String("one".into()),
            Value::Number(2.5),
            Value::Null,
            Value::Boolean(true),
        ])
    );
}
