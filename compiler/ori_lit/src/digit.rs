//! Code unit → digit value under a radix.

use ori_lit_core::CodeUnit;

/// Decode one unit as a digit in `radix`.
///
/// `0`–`9` map to 0–9 and `a`–`z` (either case) to 10–35. Returns `None`
/// when the unit is not a digit or its value is `>= radix`; callers use that
/// to stop a digit run, not as an error in itself.
///
/// `radix` must already be validated to `2..=36`.
#[inline]
pub fn digit_value<U: CodeUnit>(unit: U, radix: u32) -> Option<u32> {
    let value = match unit.to_ascii()? {
        b @ b'0'..=b'9' => b - b'0',
        b @ b'a'..=b'z' => b - b'a' + 10,
        b @ b'A'..=b'Z' => b - b'A' + 10,
        _ => return None,
    };
    let value = u32::from(value);
    (value < radix).then_some(value)
}
