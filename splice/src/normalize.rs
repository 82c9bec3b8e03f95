use tracing::debug;

use crate::utf16::utf16_len;
use crate::{LineBuffer, Position, Selection};

/// Resolves the host-reported selections into the ones to convert.
///
/// No selection, or a single bare caret, means "the whole buffer". Anything else is
/// returned unchanged and in the reported order. A buffer without lines has no
/// whole-buffer selection, so the fallback is empty.
pub fn effective_selections<B: LineBuffer + ?Sized>(
    reported: &[Selection],
    buffer: &B,
) -> Vec<Selection> {
    let falls_back = match reported {
        [] => true,
        [only] => only.is_caret(),
        _ => false,
    };

    if !falls_back {
        return reported.to_vec();
    }

    debug!(
        reported = reported.len(),
        lines = buffer.line_count(),
        "no explicit selection, using whole buffer"
    );
    whole_buffer_selection(buffer).into_iter().collect()
}

/// `(0, 0)` up to the end of the last line.
pub fn whole_buffer_selection<B: LineBuffer + ?Sized>(buffer: &B) -> Option<Selection> {
    let last = buffer.line_count().checked_sub(1)?;
    let last_line = buffer.line(last)?;

    Some(Selection::new(
        Position::new(0, 0),
        Position::new(last, utf16_len(last_line)),
    ))
}
