//! Boolean literals: `true`/`false` in any case, or `1`/`0`.

use ori_lit_core::CodeUnitView;
use tracing::trace;

use crate::{LexError, LexResult};

/// Decode a boolean from the start of `view`.
///
/// No sign or prefix is accepted. `1` and `0` consume a single unit even
/// when more digits follow.
pub fn scan_bool<V: CodeUnitView>(view: V) -> LexResult<bool> {
    if view.matches_ignore_case(0, b"true") {
        return Ok((true, 4));
    }
    if view.matches_ignore_case(0, b"false") {
        return Ok((false, 5));
    }
    match view.peek_ascii(0) {
        Some(b'1') => Ok((true, 1)),
        Some(b'0') => Ok((false, 1)),
        _ => {
            trace!(offset = view.offset(), "boolean literal rejected");
            Err(LexError::Syntax)
        }
    }
}
