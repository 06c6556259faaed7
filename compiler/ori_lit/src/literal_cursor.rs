//! Incremental literal tokenizing over a view.
//!
//! An embedding lexer owns a [`LiteralCursor`], pulls typed values off the
//! front, and steps over its own separators in between. Decoding never
//! looks past the token it matched, so re-slicing at the reported length
//! and continuing cannot re-consume a unit.

use ori_lit_core::CodeUnitView;

use crate::decode::{Decode, DecodeRadix};
use crate::LexError;

/// Cursor that advances through a view one literal at a time.
///
/// The cursor is [`Copy`], so a lexer can snapshot it before a speculative
/// decode and restore it afterwards.
#[derive(Clone, Copy, Debug)]
pub struct LiteralCursor<V> {
    rest: V,
}

impl<V: CodeUnitView> LiteralCursor<V> {
    /// Create a cursor at the start of `view`.
    pub fn new(view: V) -> Self {
        Self { rest: view }
    }

    /// Absolute offset of the next unconsumed unit.
    #[inline]
    pub fn pos(&self) -> usize {
        self.rest.offset()
    }

    /// The unconsumed remainder.
    #[inline]
    pub fn rest(&self) -> V {
        self.rest
    }

    /// Returns `true` once every unit has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// Decode a `T` and advance past it.
    ///
    /// On failure the cursor does not move.
    pub fn take<T: Decode>(&mut self) -> Result<T, LexError> {
        let (value, len) = T::decode(self.rest)?;
        self.rest = self.rest.slice_from(len);
        Ok(value)
    }

    /// Decode an integer `T` in `base` and advance past it.
    ///
    /// On failure the cursor does not move.
    pub fn take_radix<T: DecodeRadix>(&mut self, base: u32) -> Result<T, LexError> {
        let (value, len) = T::decode_radix(self.rest, base)?;
        self.rest = self.rest.slice_from(len);
        Ok(value)
    }

    /// Consume `byte` if it is the next unit.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.rest.peek_ascii(0) == Some(byte) {
            self.rest = self.rest.slice_from(1);
            true
        } else {
            false
        }
    }
}
