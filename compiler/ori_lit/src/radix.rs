//! Base resolution: explicit radix or `0x`/`0o`/`0b` prefix inference.

use ori_lit_core::CodeUnitView;

use crate::LexError;

/// Smallest accepted explicit base.
pub const MIN_RADIX: u32 = 2;
/// Largest accepted explicit base.
pub const MAX_RADIX: u32 = 36;
/// Base argument meaning "infer from prefix, default 10".
pub const INFER_RADIX: u32 = 0;

/// Validate a base argument before any scanning happens.
///
/// [`INFER_RADIX`] is accepted; any other value must lie in
/// `MIN_RADIX..=MAX_RADIX`.
#[inline]
pub fn check_radix(base: u32) -> Result<(), LexError> {
    if base == INFER_RADIX || (MIN_RADIX..=MAX_RADIX).contains(&base) {
        Ok(())
    } else {
        Err(LexError::Base)
    }
}

/// Resolve the effective radix for the digits at the start of `view`.
///
/// With an explicit base nothing is consumed, so `0xff` under base 16 stops
/// at the `x`. In infer mode a `0x`, `0o` or `0b` prefix (either case)
/// selects 16, 8 or 2 and consumes two units; anything else is base 10
/// starting at the first unit.
///
/// Returns the radix and the number of prefix units consumed.
pub fn resolve_radix<V: CodeUnitView>(view: &V, base: u32) -> Result<(u32, usize), LexError> {
    check_radix(base)?;
    if base != INFER_RADIX {
        return Ok((base, 0));
    }
    if view.peek_ascii(0) != Some(b'0') {
        return Ok((10, 0));
    }
    let radix = match view.peek_ascii(1) {
        Some(b'x' | b'X') => 16,
        Some(b'o' | b'O') => 8,
        Some(b'b' | b'B') => 2,
        _ => return Ok((10, 0)),
    };
    Ok((radix, 2))
}

#[cfg(test)]
mod tests;
