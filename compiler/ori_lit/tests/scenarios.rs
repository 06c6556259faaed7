// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end literal scenarios through the public entry points.
//!
//! Each case goes through both adapters; the byte and text results must
//! agree before the expected value is checked.

use ori_lit::{
    parse, parse_bool, parse_exact, parse_f64, parse_i32, parse_i64, parse_u32, parse_u64,
    ByteView, LexError, LexResult, LiteralCursor, TextView, INFER_RADIX,
};
use pretty_assertions::assert_eq;

fn both<T, F, G>(input: &str, text: F, bytes: G) -> LexResult<T>
where
    T: PartialEq + std::fmt::Debug,
    F: Fn(TextView<'_>) -> LexResult<T>,
    G: Fn(ByteView<'_>) -> LexResult<T>,
{
    let from_text = text(TextView::new(input));
    let from_bytes = bytes(ByteView::new(input.as_bytes()));
    assert_eq!(from_text, from_bytes, "adapters disagree on {input:?}");
    from_text
}

fn i32_in(input: &str, base: u32) -> LexResult<i32> {
    both(input, |v| parse_i32(v, base), |v| parse_i32(v, base))
}

fn f64_of(input: &str) -> LexResult<f64> {
    both(input, |v| parse_f64(v), |v| parse_f64(v))
}

fn bool_of(input: &str) -> LexResult<bool> {
    both(input, |v| parse_bool(v), |v| parse_bool(v))
}

// === Integers ===

#[test]
fn explicit_hex_base_does_not_strip_prefix() {
    // `0` matches, then `x` is not a hex digit.
    assert_eq!(i32_in("0xFF", 16), Ok((0, 1)));
    assert_eq!(i32_in("xFF", 16), Err(LexError::Syntax));
}

#[test]
fn inferred_hex() {
    assert_eq!(i32_in("0xFF", INFER_RADIX), Ok((255, 4)));
}

#[test]
fn base_36_letters() {
    assert_eq!(i32_in("ZZ", 36), Ok((1295, 2)));
}

#[test]
fn empty_input_is_syntax() {
    assert_eq!(i32_in("", 10), Err(LexError::Syntax));
}

#[test]
fn base_argument_validation() {
    for base in [1, 37, 64] {
        assert_eq!(i32_in("1", base), Err(LexError::Base), "base {base}");
    }
    assert_eq!(i32_in("1", 2), Ok((1, 1)));
    assert_eq!(i32_in("z", 36), Ok((35, 1)));
}

#[test]
fn width_boundaries() {
    assert_eq!(i32_in("2147483647", 10), Ok((i32::MAX, 10)));
    assert_eq!(i32_in("-2147483648", 10), Ok((i32::MIN, 11)));
    assert_eq!(i32_in("2147483648", 10), Err(LexError::Range));
    assert_eq!(i32_in("-2147483649", 10), Err(LexError::Range));

    let i64_max = both("9223372036854775807", |v| parse_i64(v, 10), |v| parse_i64(v, 10));
    assert_eq!(i64_max, Ok((i64::MAX, 19)));

    let u32_over = both("4294967296", |v| parse_u32(v, 10), |v| parse_u32(v, 10));
    assert_eq!(u32_over, Err(LexError::Range));

    let u64_max = both("0xFFFFFFFFFFFFFFFF", |v| parse_u64(v, 0), |v| parse_u64(v, 0));
    assert_eq!(u64_max, Ok((u64::MAX, 18)));
}

// === Floats ===

#[test]
fn scientific_float() {
    assert_eq!(f64_of("2.5e-3"), Ok((0.0025, 6)));
}

#[test]
fn float_specials() {
    assert_eq!(f64_of("inf"), Ok((f64::INFINITY, 3)));
    assert_eq!(f64_of("-inf"), Ok((f64::NEG_INFINITY, 4)));
    let (nan, len) = f64_of_nan("nan");
    assert!(nan.is_nan());
    assert!(nan != nan);
    assert_eq!(len, 3);
}

// NaN never compares equal, so adapter agreement is checked on the bits.
fn f64_of_nan(input: &str) -> (f64, usize) {
    let (a, a_len) = parse_f64(TextView::new(input)).unwrap();
    let (b, b_len) = parse_f64(ByteView::new(input.as_bytes())).unwrap();
    assert_eq!((a.to_bits(), a_len), (b.to_bits(), b_len));
    (a, a_len)
}

// === Booleans ===

#[test]
fn uppercase_true() {
    assert_eq!(bool_of("TRUE"), Ok((true, 4)));
}

#[test]
fn boolean_rejects_other_words() {
    assert_eq!(bool_of("yes"), Err(LexError::Syntax));
}

// === Embedding ===

#[test]
fn externally_split_tokens() {
    let input = "123,456";
    let values: Vec<i32> = input
        .split(',')
        .map(|part| parse_exact::<i32, _>(TextView::new(part)).unwrap())
        .collect();
    assert_eq!(values, vec![123, 456]);
}

#[test]
fn cursor_over_bytes() {
    let mut cursor = LiteralCursor::new(ByteView::new(b"7|false|-1.5e1"));
    assert_eq!(cursor.take::<u8>(), Ok(7));
    assert!(cursor.eat(b'|'));
    assert_eq!(cursor.take::<bool>(), Ok(false));
    assert!(cursor.eat(b'|'));
    assert_eq!(cursor.take::<f64>(), Ok(-15.0));
    assert!(cursor.is_eof());
}

#[test]
fn generic_parse_over_bytes() {
    assert_eq!(parse::<u64, _>(ByteView::new(b"18446744073709551615")), Ok((u64::MAX, 20)));
}
