//! Type-directed decoding.
//!
//! [`Decode`] binds a target type to the scanner that produces it, so
//! callers can write `parse::<u32>(view)` and get static dispatch to the
//! integer accumulator with `u32`'s limits. The set of implementors is
//! closed over the integer widths, `f32`/`f64`, and `bool`.

use ori_lit_core::CodeUnitView;

use crate::boolean::scan_bool;
use crate::float::scan_float;
use crate::int::scan_int;
use crate::{LexError, LexResult};

/// A type that can be decoded from the start of a view.
pub trait Decode: Sized {
    /// Decode one value, returning it with the number of units consumed.
    fn decode<V: CodeUnitView>(view: V) -> LexResult<Self>;
}

/// An integer type that can also be decoded under an explicit base.
pub trait DecodeRadix: Decode {
    /// Decode one value in `base` (`0` infers it from a prefix).
    fn decode_radix<V: CodeUnitView>(view: V, base: u32) -> LexResult<Self>;
}

macro_rules! impl_decode_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Decode for $ty {
            #[inline]
            fn decode<V: CodeUnitView>(view: V) -> LexResult<Self> {
                scan_int(view, 10)
            }
        }

        impl DecodeRadix for $ty {
            #[inline]
            fn decode_radix<V: CodeUnitView>(view: V, base: u32) -> LexResult<Self> {
                scan_int(view, base)
            }
        }
    )*};
}

impl_decode_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Decode for f64 {
    #[inline]
    fn decode<V: CodeUnitView>(view: V) -> LexResult<Self> {
        scan_float(view)
    }
}

impl Decode for f32 {
    #[inline]
    fn decode<V: CodeUnitView>(view: V) -> LexResult<Self> {
        scan_float(view)
    }
}

impl Decode for bool {
    #[inline]
    fn decode<V: CodeUnitView>(view: V) -> LexResult<Self> {
        scan_bool(view)
    }
}

/// Decode a `T` from the start of `view`. Integers use base 10.
#[inline]
pub fn parse<T: Decode, V: CodeUnitView>(view: V) -> LexResult<T> {
    T::decode(view)
}

/// Decode an integer `T` from the start of `view` in `base`.
#[inline]
pub fn parse_radix<T: DecodeRadix, V: CodeUnitView>(view: V, base: u32) -> LexResult<T> {
    T::decode_radix(view, base)
}

/// Decode a `T` that must span the whole view.
///
/// Returns only the value. Unconsumed trailing units are a
/// [`LexError::Syntax`].
pub fn parse_exact<T: Decode, V: CodeUnitView>(view: V) -> Result<T, LexError> {
    require_full(T::decode(view), view.len())
}

/// Decode an integer `T` in `base` that must span the whole view.
pub fn parse_radix_exact<T: DecodeRadix, V: CodeUnitView>(view: V, base: u32) -> Result<T, LexError> {
    require_full(T::decode_radix(view, base), view.len())
}

fn require_full<T>(outcome: LexResult<T>, len: usize) -> Result<T, LexError> {
    let (value, consumed) = outcome?;
    if consumed == len {
        Ok(value)
    } else {
        Err(LexError::Syntax)
    }
}
