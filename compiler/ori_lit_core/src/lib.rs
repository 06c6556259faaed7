//! Code-unit views for literal scanning.
//!
//! A view is a borrowed, `Copy` window over a text or byte buffer. The
//! literal decoders in `ori_lit` are written once against [`CodeUnitView`]
//! and run unchanged over either adapter:
//!
//! - [`TextView`] walks a `&str`; its code units are `char`s.
//! - [`ByteView`] walks a `&[u8]`; its code units are raw bytes.
//!
//! Only the ASCII range is meaningful to the decoders. Any other code unit
//! classifies as "not ASCII" and simply ends a match, so both adapters agree
//! on every all-ASCII input.

mod unit;
mod view;

pub use unit::CodeUnit;
pub use view::{ByteView, CodeUnitView, TextView};
