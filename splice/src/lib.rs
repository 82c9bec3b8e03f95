//! Apply text transforms to the selections of a line-oriented editor buffer.
//!
//! Pipeline: normalize selections → validate → transform + splice, last selection first.
//! Positions and spans are in UTF-16 code units, matching editor hosts. Conversions to
//! UTF-8 byte offsets live in [`utf16`].
mod buffer;
mod edit;
mod error;
mod normalize;
mod position;
mod tests;
pub mod utf16;

pub use buffer::{LineBuffer, join_lines, split_lines};
pub use edit::{SpliceSummary, TextTransform, apply_transform};
pub use error::EditError;
pub use normalize::{effective_selections, whole_buffer_selection};
pub use position::{Position, Selection, Utf16Span};
pub use utf16::{rewrite_span, utf16_len};
