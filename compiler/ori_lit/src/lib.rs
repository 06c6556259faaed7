//! Numeric and boolean literal decoding for Ori lexers.
//!
//! Every decoder recognizes a *prefix* of a [`CodeUnitView`] and returns the
//! decoded value together with the number of units it consumed. Whatever
//! follows the token is left for the embedding lexer to deal with:
//!
//! ```
//! use ori_lit::{parse_i32, parse_f64, TextView};
//!
//! assert_eq!(parse_i32(TextView::new("123,456"), 10), Ok((123, 3)));
//! assert_eq!(parse_f64(TextView::new("2.5e-3)")), Ok((0.0025, 6)));
//! ```
//!
//! The same engine runs over text ([`TextView`]) and raw bytes
//! ([`ByteView`]); for ASCII input both give identical results.
//!
//! # Pipeline
//!
//! - integers: sign → base resolution → digit accumulation
//! - floats: sign → `inf`/`nan` or decimal syntax → std conversion
//! - booleans: `true`/`false` (any case) or `1`/`0`

mod boolean;
mod decode;
mod digit;
mod float;
mod int;
mod lex_error;
mod literal_cursor;
mod radix;
mod sign;

pub use boolean::scan_bool;
pub use decode::{parse, parse_exact, parse_radix, parse_radix_exact, Decode, DecodeRadix};
pub use digit::digit_value;
pub use float::{scan_float, FixedFloat};
pub use int::{accumulate, scan_int, FixedInt};
pub use lex_error::{LexError, LexResult};
pub use literal_cursor::LiteralCursor;
pub use ori_lit_core::{ByteView, CodeUnit, CodeUnitView, TextView};
pub use radix::{check_radix, resolve_radix, INFER_RADIX, MAX_RADIX, MIN_RADIX};
pub use sign::{scan_sign, Sign};

/// Decode an `i32` in `base` (`0` infers `0x`/`0o`/`0b`, otherwise `2..=36`).
#[inline]
pub fn parse_i32<V: CodeUnitView>(view: V, base: u32) -> LexResult<i32> {
    scan_int(view, base)
}

/// Decode an `i64` in `base` (`0` infers `0x`/`0o`/`0b`, otherwise `2..=36`).
#[inline]
pub fn parse_i64<V: CodeUnitView>(view: V, base: u32) -> LexResult<i64> {
    scan_int(view, base)
}

/// Decode a `u32` in `base` (`0` infers `0x`/`0o`/`0b`, otherwise `2..=36`).
#[inline]
pub fn parse_u32<V: CodeUnitView>(view: V, base: u32) -> LexResult<u32> {
    scan_int(view, base)
}

/// Decode a `u64` in `base` (`0` infers `0x`/`0o`/`0b`, otherwise `2..=36`).
#[inline]
pub fn parse_u64<V: CodeUnitView>(view: V, base: u32) -> LexResult<u64> {
    scan_int(view, base)
}

/// Decode an `f64`.
#[inline]
pub fn parse_f64<V: CodeUnitView>(view: V) -> LexResult<f64> {
    scan_float(view)
}

/// Decode a `bool`.
#[inline]
pub fn parse_bool<V: CodeUnitView>(view: V) -> LexResult<bool> {
    scan_bool(view)
}
