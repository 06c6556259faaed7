use super::*;
use pretty_assertions::assert_eq;

fn options(kind: LiteralKind, base: u32, bytes: bool, exact: bool) -> Options {
    Options {
        kind,
        base,
        bytes,
        exact,
        literals: Vec::new(),
    }
}

#[test]
fn integer_with_trailing_content() {
    let opts = options(LiteralKind::I32, 10, false, false);
    assert_eq!(decode_literal(&opts, "123,456"), Ok("123 (3/7)".to_string()));
}

#[test]
fn exact_rejects_trailing_content() {
    let opts = options(LiteralKind::I32, 10, false, true);
    assert_eq!(decode_literal(&opts, "123,456"), Err(LexError::Syntax));
    assert_eq!(decode_literal(&opts, "123"), Ok("123 (3/3)".to_string()));
}

#[test]
fn inferred_base_over_bytes() {
    let opts = options(LiteralKind::U16, 0, true, false);
    assert_eq!(decode_literal(&opts, "0xFFFF"), Ok("65535 (6/6)".to_string()));
    assert_eq!(decode_literal(&opts, "0x10000"), Err(LexError::Range));
}

#[test]
fn floats_and_bools() {
    let f = options(LiteralKind::F64, 10, false, false);
    assert_eq!(decode_literal(&f, "2.5e-3"), Ok("0.0025 (6/6)".to_string()));
    assert_eq!(decode_literal(&f, "-inf"), Ok("-inf (4/4)".to_string()));
    let b = options(LiteralKind::Bool, 10, false, false);
    assert_eq!(decode_literal(&b, "TRUE"), Ok("true (4/4)".to_string()));
}

#[test]
fn lengths_count_characters() {
    let opts = options(LiteralKind::I32, 10, false, false);
    assert_eq!(decode_literal(&opts, "1é"), Ok("1 (1/2)".to_string()));
    let exact = options(LiteralKind::I32, 10, false, true);
    assert_eq!(decode_literal(&exact, "1é"), Err(LexError::Syntax));
}

#[test]
fn exact_bools_and_radix() {
    let b = options(LiteralKind::Bool, 10, true, true);
    assert_eq!(decode_literal(&b, "10"), Err(LexError::Syntax));
    let hex = options(LiteralKind::U8, 16, false, true);
    assert_eq!(decode_literal(&hex, "ff"), Ok("255 (2/2)".to_string()));
    assert_eq!(decode_literal(&hex, "0xff"), Err(LexError::Syntax));
}
