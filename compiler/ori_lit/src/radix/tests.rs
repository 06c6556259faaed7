use super::*;
use ori_lit_core::{ByteView, TextView};
use pretty_assertions::assert_eq;

// === Validation ===

#[test]
fn extremes_are_valid() {
    assert_eq!(check_radix(MIN_RADIX), Ok(()));
    assert_eq!(check_radix(MAX_RADIX), Ok(()));
    assert_eq!(check_radix(INFER_RADIX), Ok(()));
}

#[test]
fn out_of_range_bases_rejected() {
    assert_eq!(check_radix(1), Err(LexError::Base));
    assert_eq!(check_radix(37), Err(LexError::Base));
    assert_eq!(check_radix(u32::MAX), Err(LexError::Base));
}

#[test]
fn invalid_base_rejected_before_scanning() {
    assert_eq!(resolve_radix(&TextView::new(""), 1), Err(LexError::Base));
    assert_eq!(resolve_radix(&TextView::new("0x1"), 37), Err(LexError::Base));
}

// === Explicit base ===

#[test]
fn explicit_base_consumes_nothing() {
    assert_eq!(resolve_radix(&TextView::new("0xff"), 16), Ok((16, 0)));
    assert_eq!(resolve_radix(&TextView::new("ff"), 16), Ok((16, 0)));
    assert_eq!(resolve_radix(&TextView::new("0b1"), 2), Ok((2, 0)));
}

// === Inference ===

#[test]
fn infers_prefixes_case_insensitively() {
    for (text, radix) in [
        ("0x1", 16),
        ("0X1", 16),
        ("0o7", 8),
        ("0O7", 8),
        ("0b1", 2),
        ("0B1", 2),
    ] {
        assert_eq!(
            resolve_radix(&TextView::new(text), INFER_RADIX),
            Ok((radix, 2)),
            "{text}"
        );
    }
}

#[test]
fn prefix_without_digits_still_consumed() {
    assert_eq!(resolve_radix(&ByteView::new(b"0x"), INFER_RADIX), Ok((16, 2)));
}

#[test]
fn lone_zero_is_decimal() {
    assert_eq!(resolve_radix(&TextView::new("0"), INFER_RADIX), Ok((10, 0)));
    assert_eq!(resolve_radix(&TextView::new("012"), INFER_RADIX), Ok((10, 0)));
    assert_eq!(resolve_radix(&TextView::new("0z"), INFER_RADIX), Ok((10, 0)));
}

#[test]
fn no_prefix_is_decimal() {
    assert_eq!(resolve_radix(&TextView::new("123"), INFER_RADIX), Ok((10, 0)));
    assert_eq!(resolve_radix(&TextView::new(""), INFER_RADIX), Ok((10, 0)));
    assert_eq!(resolve_radix(&TextView::new("x1"), INFER_RADIX), Ok((10, 0)));
}
