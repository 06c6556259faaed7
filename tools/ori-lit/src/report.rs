//! Decode one command-line literal and format the outcome.

use std::fmt::Display;

use ori_lit::{
    parse, parse_exact, parse_radix, parse_radix_exact, ByteView, CodeUnitView, Decode,
    DecodeRadix, LexError, TextView,
};

use crate::options::{LiteralKind, Options};

/// Decode `literal` as configured and render `value (consumed/len)`.
pub fn decode_literal(options: &Options, literal: &str) -> Result<String, LexError> {
    if options.bytes {
        decode_view(options, ByteView::new(literal.as_bytes()))
    } else {
        decode_view(options, TextView::new(literal))
    }
}

fn decode_view<V: CodeUnitView>(options: &Options, view: V) -> Result<String, LexError> {
    match options.kind {
        LiteralKind::I8 => int::<i8, V>(options, view),
        LiteralKind::I16 => int::<i16, V>(options, view),
        LiteralKind::I32 => int::<i32, V>(options, view),
        LiteralKind::I64 => int::<i64, V>(options, view),
        LiteralKind::U8 => int::<u8, V>(options, view),
        LiteralKind::U16 => int::<u16, V>(options, view),
        LiteralKind::U32 => int::<u32, V>(options, view),
        LiteralKind::U64 => int::<u64, V>(options, view),
        LiteralKind::F32 => other::<f32, V>(options, view),
        LiteralKind::F64 => other::<f64, V>(options, view),
        LiteralKind::Bool => other::<bool, V>(options, view),
    }
}

fn int<T: DecodeRadix + Display, V: CodeUnitView>(options: &Options, view: V) -> Result<String, LexError> {
    let len = view.len();
    if options.exact {
        parse_radix_exact::<T, V>(view, options.base).map(|value| render(value, len, len))
    } else {
        parse_radix::<T, V>(view, options.base).map(|(value, consumed)| render(value, consumed, len))
    }
}

fn other<T: Decode + Display, V: CodeUnitView>(options: &Options, view: V) -> Result<String, LexError> {
    let len = view.len();
    if options.exact {
        parse_exact::<T, V>(view).map(|value| render(value, len, len))
    } else {
        parse::<T, V>(view).map(|(value, consumed)| render(value, consumed, len))
    }
}

fn render<T: Display>(value: T, consumed: usize, len: usize) -> String {
    format!("{value} ({consumed}/{len})")
}

#[cfg(test)]
mod tests;
