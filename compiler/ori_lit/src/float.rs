//! Decimal and scientific float literals, plus `inf`/`infinity`/`nan`.
//!
//! The scanner only recognizes the token. Conversion of the matched text to
//! binary is left to the standard library, which rounds to nearest-even.

use std::ops::Neg;
use std::str::FromStr;

use ori_lit_core::CodeUnitView;
use tracing::trace;

use crate::sign::scan_sign;
use crate::{LexError, LexResult};

/// An IEEE-754 float the scanner can produce.
pub trait FixedFloat: Copy + FromStr + Neg<Output = Self> {
    /// Value of `inf`/`infinity`.
    const INFINITY: Self;
    /// Value of `nan`.
    const NAN: Self;
}

impl FixedFloat for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;
}

impl FixedFloat for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;
}

/// Shape of a matched decimal float, gathered in one pass.
///
/// Only lives long enough to validate the token and measure it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FloatToken {
    int_digits: usize,
    frac_digits: usize,
    exp_digits: usize,
    /// Units covered by the token, sign excluded.
    len: usize,
}

/// Count ASCII decimal digits starting at `at`.
fn count_digits<V: CodeUnitView>(view: &V, at: usize) -> usize {
    let mut n = 0;
    while view.peek_ascii(at + n).is_some_and(|b| b.is_ascii_digit()) {
        n += 1;
    }
    n
}

/// Match `digits [. digits] [(e|E) [+|-] digits]` at the start of `view`.
fn match_decimal<V: CodeUnitView>(view: &V) -> Result<FloatToken, LexError> {
    let mut token = FloatToken {
        int_digits: count_digits(view, 0),
        ..FloatToken::default()
    };
    let mut pos = token.int_digits;

    if view.peek_ascii(pos) == Some(b'.') {
        let frac_digits = count_digits(view, pos + 1);
        // "." alone is not a mantissa; leave the dot for the caller.
        if token.int_digits > 0 || frac_digits > 0 {
            token.frac_digits = frac_digits;
            pos += 1 + frac_digits;
        }
    }

    if token.int_digits + token.frac_digits == 0 {
        return Err(LexError::Syntax);
    }

    if matches!(view.peek_ascii(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(view.peek_ascii(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        token.exp_digits = count_digits(view, exp);
        if token.exp_digits == 0 {
            return Err(LexError::Syntax);
        }
        pos = exp + token.exp_digits;
    }

    token.len = pos;
    Ok(token)
}

/// Match one of the special spellings, longest first.
fn match_special<V: CodeUnitView, F: FixedFloat>(view: &V) -> Option<(F, usize)> {
    if view.matches_ignore_case(0, b"infinity") {
        Some((F::INFINITY, 8))
    } else if view.matches_ignore_case(0, b"inf") {
        Some((F::INFINITY, 3))
    } else if view.matches_ignore_case(0, b"nan") {
        Some((F::NAN, 3))
    } else {
        None
    }
}

/// Decode a float of type `F` from the start of `view`.
///
/// Accepts an optional sign, then either a special token (`inf`,
/// `infinity`, `nan`, any case) or decimal syntax such as `1`, `1.`, `.5`,
/// `2.5e-3`. An exponent marker without digits is a syntax error rather
/// than a shorter match. Values too large for `F` round to infinity.
pub fn scan_float<F: FixedFloat, V: CodeUnitView>(view: V) -> LexResult<F> {
    let (sign, sign_len) = scan_sign(&view);
    let rest = view.slice_from(sign_len);

    let decoded = match match_special::<V, F>(&rest) {
        Some(special) => Ok(special),
        None => match_decimal(&rest).and_then(|token| {
            let text = rest.ascii_prefix(token.len).ok_or(LexError::Syntax)?;
            let value = text.parse::<F>().map_err(|_| LexError::Syntax)?;
            Ok((value, token.len))
        }),
    };

    match decoded {
        Ok((magnitude, len)) => {
            let value = if sign.is_negative() { -magnitude } else { magnitude };
            Ok((value, sign_len + len))
        }
        Err(err) => {
            trace!(offset = view.offset(), ?sign, %err, "float literal rejected");
            Err(err)
        }
    }
}
