//! Optional leading `+`/`-`.

use ori_lit_core::CodeUnitView;

/// Polarity of a numeric literal. An absent sign is positive.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Sign {
    /// No sign, or a leading `+`.
    #[default]
    Positive,
    /// A leading `-`.
    Negative,
}

impl Sign {
    /// Returns `true` for [`Sign::Negative`].
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

/// Consume an optional leading sign. Never fails.
///
/// Returns the polarity and the number of units consumed (0 or 1).
#[inline]
pub fn scan_sign<V: CodeUnitView>(view: &V) -> (Sign, usize) {
    match view.peek_ascii(0) {
        Some(b'+') => (Sign::Positive, 1),
        Some(b'-') => (Sign::Negative, 1),
        _ => (Sign::Positive, 0),
    }
}
