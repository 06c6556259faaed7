//! Per-unit ASCII recognition.

use std::fmt;

/// A single element of a scanned sequence.
///
/// Implementors only need to say whether the unit is ASCII and, if so,
/// which byte it is. Everything else (digits, signs, letters) is derived
/// from that byte.
pub trait CodeUnit: Copy + Eq + fmt::Debug {
    /// The unit as an ASCII byte, or `None` for anything outside `0x00..=0x7F`.
    fn to_ascii(self) -> Option<u8>;

    /// Returns `true` if the unit is `byte`, comparing ASCII case-insensitively.
    #[inline]
    fn eq_ascii_ignore_case(self, byte: u8) -> bool {
        self.to_ascii()
            .is_some_and(|b| u8::eq_ignore_ascii_case(&b, &byte))
    }
}

impl CodeUnit for u8 {
    #[inline]
    fn to_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }
}

impl CodeUnit for char {
    #[inline]
    fn to_ascii(self) -> Option<u8> {
        u8::try_from(self).ok().filter(u8::is_ascii)
    }
}
