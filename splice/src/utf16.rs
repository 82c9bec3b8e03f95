//! Conversions between UTF-16 code unit offsets (host coordinates) and UTF-8 byte offsets.
//!
//! Offsets past the end clamp to the end. An offset landing inside a surrogate pair
//! rounds up to the next char boundary.
use std::ops::Range;

use crate::Utf16Span;

pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

pub fn utf16_offset_to_byte(text: &str, utf16: usize) -> usize {
    if utf16 == 0 {
        return 0;
    }

    let mut u16_count = 0usize;
    for (byte_idx, ch) in text.char_indices() {
        if u16_count >= utf16 {
            return byte_idx;
        }
        u16_count += ch.len_utf16();
    }

    text.len()
}

/// Byte range of `span` in `text`, safe to slice with.
pub fn utf16_span_to_byte_range(text: &str, span: Utf16Span) -> Range<usize> {
    let start = utf16_offset_to_byte(text, span.start);
    let end = utf16_offset_to_byte(text, span.end).max(start);
    start..end
}

/// Rebuilds `text` with only the slice under `span` passed through `f`.
///
/// Text before and after the span is kept verbatim, which is what a [`crate::TextTransform`]
/// usually wants to return.
pub fn rewrite_span(text: &str, span: Utf16Span, f: impl FnOnce(&str) -> String) -> String {
    let range = utf16_span_to_byte_range(text, span);
    let replaced = f(&text[range.clone()]);

    let mut out = String::with_capacity(text.len() - range.len() + replaced.len());
    out.push_str(&text[..range.start]);
    out.push_str(&replaced);
    out.push_str(&text[range.end..]);
    out
}
