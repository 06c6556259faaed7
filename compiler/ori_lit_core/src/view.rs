//! Read-only windows over a text or byte buffer.
//!
//! Views never own or copy their data. Slicing produces a new view over the
//! same buffer in O(1) and records the absolute offset so callers can map
//! positions back to the original input.

use crate::CodeUnit;

/// A borrowed window over a sequence of code units.
///
/// # Contract
///
/// - `peek(i)` returns `None` for every `i >= len()`.
/// - `slice_from(i)` panics when `i > len()`. Offsets handed to it by the
///   decoders are always derived from matched units, so this only fires on
///   a programming error, never on user input.
/// - `offset()` of `slice_from(i)` is `offset() + i`.
pub trait CodeUnitView: Copy {
    /// The element type produced by [`peek`](Self::peek).
    type Unit: CodeUnit;

    /// Returns the unit at index `i`, or `None` past the end.
    fn peek(&self, i: usize) -> Option<Self::Unit>;

    /// Number of units remaining in the view.
    fn len(&self) -> usize;

    /// Returns the remainder of the view starting at index `i`.
    fn slice_from(&self, i: usize) -> Self;

    /// Absolute position of this view's first unit in the underlying buffer.
    fn offset(&self) -> usize;

    /// The first `n` units as a string, if they are all ASCII.
    ///
    /// Used to hand an already-validated token to the standard library's
    /// numeric conversions without copying.
    fn ascii_prefix(&self, n: usize) -> Option<&str>;

    /// Returns `true` if the view has no units left.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The unit at index `i` as an ASCII byte.
    ///
    /// `None` both past the end and for non-ASCII units; callers treat the
    /// two the same way.
    #[inline]
    fn peek_ascii(&self, i: usize) -> Option<u8> {
        self.peek(i).and_then(CodeUnit::to_ascii)
    }

    /// Returns `true` if the units starting at `at` spell `word`, ignoring
    /// ASCII case.
    fn matches_ignore_case(&self, at: usize, word: &[u8]) -> bool {
        word.iter().enumerate().all(|(i, &expected)| {
            self.peek(at + i)
                .is_some_and(|unit| unit.eq_ascii_ignore_case(expected))
        })
    }
}

/// View over UTF-8 text. Code units are `char`s.
///
/// Indices, lengths and offsets all count characters. The leading run of
/// ASCII bytes is tracked so that peeking and slicing inside it stay O(1);
/// only positions past the first non-ASCII character walk the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextView<'a> {
    rest: &'a str,
    /// Absolute character offset of `rest` in the original text.
    offset: usize,
    /// Characters remaining in `rest`.
    len: usize,
    /// Length of the all-ASCII prefix of `rest`, in bytes (= characters).
    ascii_run: usize,
}

/// Length of the leading ASCII run of `text`.
fn ascii_run(text: &str) -> usize {
    text.bytes().position(|b| !b.is_ascii()).unwrap_or(text.len())
}

impl<'a> TextView<'a> {
    /// Create a view over the whole of `text`.
    pub fn new(text: &'a str) -> Self {
        let ascii_run = ascii_run(text);
        let len = if ascii_run == text.len() {
            ascii_run
        } else {
            ascii_run + text[ascii_run..].chars().count()
        };
        Self {
            rest: text,
            offset: 0,
            len,
            ascii_run,
        }
    }

    /// The unconsumed text.
    pub fn as_str(&self) -> &'a str {
        self.rest
    }

    /// Byte index in `rest` of the character at index `i` (`i <= len`).
    fn byte_index(&self, i: usize) -> usize {
        if i <= self.ascii_run {
            return i;
        }
        let tail = &self.rest[self.ascii_run..];
        self.ascii_run
            + tail
                .char_indices()
                .nth(i - self.ascii_run)
                .map_or(tail.len(), |(b, _)| b)
    }
}

impl<'a> From<&'a str> for TextView<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl CodeUnitView for TextView<'_> {
    type Unit = char;

    #[inline]
    fn peek(&self, i: usize) -> Option<char> {
        if i < self.ascii_run {
            return Some(char::from(self.rest.as_bytes()[i]));
        }
        self.rest[self.ascii_run..].chars().nth(i - self.ascii_run)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn slice_from(&self, i: usize) -> Self {
        assert!(
            i <= self.len,
            "slice_from({i}) past end of view (len {})",
            self.len
        );
        let rest = &self.rest[self.byte_index(i)..];
        let ascii_run = if i <= self.ascii_run {
            self.ascii_run - i
        } else {
            ascii_run(rest)
        };
        Self {
            rest,
            offset: self.offset + i,
            len: self.len - i,
            ascii_run,
        }
    }

    #[inline]
    fn offset(&self) -> usize {
        self.offset
    }

    fn ascii_prefix(&self, n: usize) -> Option<&str> {
        (n <= self.ascii_run).then(|| &self.rest[..n])
    }
}

/// View over raw bytes. Code units are `u8`s compared directly against the
/// ASCII ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ByteView<'a> {
    rest: &'a [u8],
    offset: usize,
}

impl<'a> ByteView<'a> {
    /// Create a view over the whole of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            rest: bytes,
            offset: 0,
        }
    }

    /// The unconsumed bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl CodeUnitView for ByteView<'_> {
    type Unit = u8;

    #[inline]
    fn peek(&self, i: usize) -> Option<u8> {
        self.rest.get(i).copied()
    }

    #[inline]
    fn len(&self) -> usize {
        self.rest.len()
    }

    fn slice_from(&self, i: usize) -> Self {
        assert!(
            i <= self.rest.len(),
            "slice_from({i}) past end of view (len {})",
            self.rest.len()
        );
        Self {
            rest: &self.rest[i..],
            offset: self.offset + i,
        }
    }

    #[inline]
    fn offset(&self) -> usize {
        self.offset
    }

    fn ascii_prefix(&self, n: usize) -> Option<&str> {
        let prefix = self.rest.get(..n)?;
        if prefix.is_ascii() {
            std::str::from_utf8(prefix).ok()
        } else {
            None
        }
    }
}
