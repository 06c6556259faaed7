//! Overflow-checked integer accumulation.
//!
//! Digits are folded into a `u64` magnitude that is checked against the
//! target's limit before every step, so the accumulator never wraps. The
//! limit depends on the sign: for signed types the negative limit is one
//! larger than the positive one (`i32` allows 2147483647 and -2147483648),
//! and for unsigned types the negative limit is zero.

use ori_lit_core::CodeUnitView;
use tracing::trace;

use crate::digit::digit_value;
use crate::radix::resolve_radix;
use crate::sign::{scan_sign, Sign};
use crate::{LexError, LexResult};

/// A fixed-width integer the accumulator can produce.
pub trait FixedInt: Copy {
    /// Largest magnitude of a positive value (`MAX`).
    const POSITIVE_LIMIT: u64;
    /// Largest magnitude of a negative value (`|MIN|`, zero when unsigned).
    const NEGATIVE_LIMIT: u64;

    /// Build the value from a sign and a magnitude within the sign's limit.
    fn from_magnitude(sign: Sign, magnitude: u64) -> Self;

    /// The magnitude limit for values of the given sign.
    #[inline]
    fn limit(sign: Sign) -> u64 {
        match sign {
            Sign::Positive => Self::POSITIVE_LIMIT,
            Sign::Negative => Self::NEGATIVE_LIMIT,
        }
    }
}

macro_rules! impl_fixed_signed {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {$(
        impl FixedInt for $ty {
            const POSITIVE_LIMIT: u64 = <$ty>::MAX.unsigned_abs() as u64;
            const NEGATIVE_LIMIT: u64 = <$ty>::MIN.unsigned_abs() as u64;

            #[allow(
                clippy::cast_possible_truncation,
                reason = "magnitude is bounded by NEGATIVE_LIMIT, which fits the unsigned twin"
            )]
            #[inline]
            fn from_magnitude(sign: Sign, magnitude: u64) -> Self {
                let magnitude = magnitude as $unsigned;
                match sign {
                    Sign::Positive => <$ty>::default().wrapping_add_unsigned(magnitude),
                    Sign::Negative => <$ty>::default().wrapping_sub_unsigned(magnitude),
                }
            }
        }
    )*};
}

macro_rules! impl_fixed_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl FixedInt for $ty {
            const POSITIVE_LIMIT: u64 = <$ty>::MAX as u64;
            const NEGATIVE_LIMIT: u64 = 0;

            #[allow(
                clippy::cast_possible_truncation,
                reason = "magnitude is bounded by POSITIVE_LIMIT"
            )]
            #[inline]
            fn from_magnitude(_sign: Sign, magnitude: u64) -> Self {
                // A negative magnitude can only be zero here.
                magnitude as $ty
            }
        }
    )*};
}

impl_fixed_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
impl_fixed_unsigned!(u8, u16, u32, u64);

/// Fold the leading digit run of `view` in `radix` into a magnitude.
///
/// Stops at the first unit that is not a digit in `radix`. Fails with
/// [`LexError::Syntax`] if there are no digits at all and with
/// [`LexError::Range`] as soon as the magnitude would exceed `limit`.
///
/// Returns the magnitude and the number of digits consumed.
pub fn accumulate<V: CodeUnitView>(view: &V, radix: u32, limit: u64) -> Result<(u64, usize), LexError> {
    let wide_radix = u64::from(radix);
    let mut magnitude: u64 = 0;
    let mut len = 0;

    while let Some(digit) = view.peek(len).and_then(|unit| digit_value(unit, radix)) {
        let digit = u64::from(digit);
        // magnitude * radix + digit <= limit, rearranged to avoid overflow.
        let fits = limit
            .checked_sub(digit)
            .is_some_and(|room| magnitude <= room / wide_radix);
        if !fits {
            return Err(LexError::Range);
        }
        magnitude = magnitude * wide_radix + digit;
        len += 1;
    }

    if len == 0 {
        return Err(LexError::Syntax);
    }
    Ok((magnitude, len))
}

/// Decode an integer of type `T` from the start of `view`.
///
/// Runs sign, base resolution, and accumulation in that order. `base` is an
/// explicit radix in `2..=36`, or [`INFER_RADIX`](crate::INFER_RADIX) to read
/// a `0x`/`0o`/`0b` prefix. Trailing content after the last digit is left
/// unconsumed.
pub fn scan_int<T: FixedInt, V: CodeUnitView>(view: V, base: u32) -> LexResult<T> {
    // The sign scan cannot fail, so an invalid base is still the first error.
    let (sign, sign_len) = scan_sign(&view);
    let rest = view.slice_from(sign_len);
    let (radix, prefix_len) = resolve_radix(&rest, base)?;
    let digits = rest.slice_from(prefix_len);

    match accumulate(&digits, radix, T::limit(sign)) {
        Ok((magnitude, digit_len)) => Ok((
            T::from_magnitude(sign, magnitude),
            sign_len + prefix_len + digit_len,
        )),
        Err(err) => {
            trace!(offset = view.offset(), radix, ?sign, %err, "integer literal rejected");
            Err(err)
        }
    }
}
