// SPDX-License-Identifier: Apache-2.0

// Successful parses through the public entry points

use minijson::{parse, parse_from_slice, JsonType, JsonValue, SliceParser};

fn parse_ok(input: &str) -> JsonValue {
    let mut value = JsonValue::default();
    match parse(&mut value, input) {
        Ok(()) => value,
        Err(e) => panic!("Parse error for {:?}: {:?}", input, e),
    }
}

#[test]
fn test_parse_null() {
    let mut value = JsonValue::False;
    assert_eq!(parse(&mut value, "null"), Ok(()));
    assert_eq!(value.get_type(), JsonType::Null);
}

#[test]
fn test_parse_true() {
    assert_eq!(parse_ok("true").get_type(), JsonType::True);
}

#[test]
fn test_parse_false() {
    assert_eq!(parse_ok("false").get_type(), JsonType::False);
}

#[test]
fn test_literals_with_whitespace() {
    let padding = [" ", "\t", "\n", "\r", " \t\r\n", "\n\n  \t"];
    for (text, expected) in [
        ("null", JsonType::Null),
        ("true", JsonType::True),
        ("false", JsonType::False),
    ] {
        for before in padding {
            for after in padding {
                let input = format!("{before}{text}{after}");
                assert_eq!(parse_ok(&input).get_type(), expected, "input {:?}", input);
            }
        }
    }
}

macro_rules! number_tests {
    ($($name:ident: $input:expr => $expected:expr,)*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_number_ $name>]() {
                    let value = parse_ok($input);
                    assert_eq!(value.get_type(), JsonType::Number);
                    assert_eq!(value.get_number(), $expected);
                }
            }
        )*
    };
}

number_tests! {
    zero: "0" => 0.0,
    negative_zero: "-0" => 0.0,
    negative_zero_fraction: "-0.0" => 0.0,
    one: "1" => 1.0,
    negative_one: "-1" => -1.0,
    fraction: "1.5" => 1.5,
    negative_fraction: "-1.5" => -1.5,
    pi: "3.1416" => 3.1416,
    upper_exponent: "1E10" => 1E10,
    lower_exponent: "1e10" => 1e10,
    plus_exponent: "1E+10" => 1E+10,
    minus_exponent: "1E-10" => 1E-10,
    negative_upper_exponent: "-1E10" => -1E10,
    negative_lower_exponent: "-1e10" => -1e10,
    negative_plus_exponent: "-1E+10" => -1E+10,
    negative_minus_exponent: "-1E-10" => -1E-10,
    fraction_plus_exponent: "1.234E+10" => 1.234E+10,
    fraction_minus_exponent: "1.234E-10" => 1.234E-10,
    underflow: "1e-10000" => 0.0,
    smallest_above_one: "1.0000000000000002" => 1.0000000000000002,
    min_denormal: "4.9406564584124654e-324" => 4.9406564584124654e-324,
    negative_min_denormal: "-4.9406564584124654e-324" => -4.9406564584124654e-324,
    max_subnormal: "2.2250738585072009e-308" => 2.2250738585072009e-308,
    negative_max_subnormal: "-2.2250738585072009e-308" => -2.2250738585072009e-308,
    min_normal: "2.2250738585072014e-308" => 2.2250738585072014e-308,
    negative_min_normal: "-2.2250738585072014e-308" => -2.2250738585072014e-308,
    max_double: "1.7976931348623157e+308" => 1.7976931348623157e+308,
    negative_max_double: "-1.7976931348623157e+308" => -1.7976931348623157e+308,
    padded: " \n 42 \t" => 42.0,
    long_integer: "12345678901234567890" => 12345678901234567890.0,
}

#[test]
fn test_negative_zero_sign_is_kept() {
    let value = parse_ok("-0");
    assert!(value.get_number().is_sign_negative());
}

#[test]
fn test_parse_from_slice() {
    let mut value = JsonValue::default();
    assert_eq!(parse_from_slice(&mut value, b" 2.5 "), Ok(()));
    assert_eq!(value, JsonValue::Number(2.5));
}

#[test]
fn test_slice_parser_entry_points() {
    assert_eq!(SliceParser::new("true").parse(), Ok(JsonValue::True));
    assert_eq!(SliceParser::new_from_slice(b"null").parse(), Ok(JsonValue::Null));

    let mut value = JsonValue::default();
    assert_eq!(SliceParser::new("-7").parse_into(&mut value), Ok(()));
    assert_eq!(value.as_f64(), Some(-7.0));
}

#[test]
fn test_parse_overwrites_previous_value() {
    let mut value = JsonValue::default();
    assert_eq!(parse(&mut value, "12"), Ok(()));
    assert_eq!(value.get_number(), 12.0);
    assert_eq!(parse(&mut value, "true"), Ok(()));
    assert_eq!(value, JsonValue::True);
}

#[test]
fn test_display_round_trip() {
    for input in ["null", "true", "false", "0", "-1.5", "1e-7", "123456789"] {
        let value = parse_ok(input);
        let reparsed = parse_ok(&value.to_string());
        assert_eq!(value, reparsed, "input {:?}", input);
    }
}
