//! Literal decoding errors.
//!
//! The taxonomy is closed: every failure is a syntax, range, or base error,
//! and each carries one fixed message. Errors hold no partial result and no
//! position; callers already know where they started decoding.

use thiserror::Error;

/// Why a literal could not be decoded.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum LexError {
    /// No valid token prefix: empty digit run, lone sign, malformed
    /// exponent, unrecognized boolean spelling.
    #[error("invalid syntax")]
    Syntax,
    /// The digits name a number the target type cannot represent.
    #[error("value out of range")]
    Range,
    /// Explicit base outside `2..=36`.
    #[error("invalid base")]
    Base,
}

impl LexError {
    /// Every error tag, in declaration order.
    pub const ALL: [LexError; 3] = [LexError::Syntax, LexError::Range, LexError::Base];

    /// The fixed human-readable message for this error.
    ///
    /// Identical to the `Display` output.
    pub const fn message(self) -> &'static str {
        match self {
            LexError::Syntax => "invalid syntax",
            LexError::Range => "value out of range",
            LexError::Base => "invalid base",
        }
    }
}

/// A decoded value and the number of code units it consumed.
pub type LexResult<T> = Result<(T, usize), LexError>;
