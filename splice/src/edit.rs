//! Apply a text transform to selections of a line buffer and splice the result back.
//!
//! Selections are applied from the end of the document to the start. Replacing a block of
//! lines can change the line count, which would shift every selection after it; nothing
//! before it moves.

use tracing::debug;

use crate::utf16::utf16_len;
use crate::{EditError, LineBuffer, Selection, Utf16Span};

/// Rewrites source text within a UTF-16 span.
///
/// `text` is the full content of the selected lines, including text before the selection on
/// its first line and after it on its last line. The returned string replaces all of `text`,
/// so an implementation that only wants to touch `span` must copy the rest through
/// (see [`crate::rewrite_span`]).
pub trait TextTransform {
    fn transform(&mut self, text: &str, span: Utf16Span) -> String;
}

impl<F> TextTransform for F
where
    F: FnMut(&str, Utf16Span) -> String,
{
    fn transform(&mut self, text: &str, span: Utf16Span) -> String {
        self(text, span)
    }
}

/// What an [`apply_transform`] pass did to the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpliceSummary {
    pub selections: usize,
    /// Net change in line count.
    pub line_delta: isize,
}

/// Runs `transform` over every selection and splices the results into `buffer`.
///
/// The whole set is validated first; on error the buffer is left untouched.
pub fn apply_transform<B, T>(
    buffer: &mut B,
    selections: &[Selection],
    transform: &mut T,
) -> Result<SpliceSummary, EditError>
where
    B: LineBuffer + ?Sized,
    T: TextTransform + ?Sized,
{
    let order = validate_selections(&*buffer, selections)?;

    let mut summary = SpliceSummary::default();
    for index in order {
        summary.line_delta += splice_selection(buffer, index, selections[index], transform)?;
        summary.selections += 1;
    }

    Ok(summary)
}

/// Returns selection indices in application order: descending by start, ties broken so the
/// longer selection goes first.
fn validate_selections<B: LineBuffer + ?Sized>(
    buffer: &B,
    selections: &[Selection],
) -> Result<Vec<usize>, EditError> {
    let line_count = buffer.line_count();

    for (index, &selection) in selections.iter().enumerate() {
        if selection.is_inverted() {
            debug!(index, ?selection, "rejecting inverted selection");
            return Err(EditError::InvertedSelection { index, selection });
        }
        if !within_buffer(buffer, selection) {
            debug!(index, ?selection, line_count, "rejecting out of bounds selection");
            return Err(EditError::SelectionOutOfBounds {
                index,
                selection,
                line_count,
            });
        }
    }

    let mut order: Vec<usize> = (0..selections.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&selections[a], &selections[b]);
        b.start.cmp(&a.start).then(b.end.cmp(&a.end))
    });

    // Everything already ordered starts at or after `prev`, so checking against the most
    // recent one is enough.
    let mut prev: Option<usize> = None;
    for &index in &order {
        if let Some(other) = prev {
            if selections[index].overlaps(&selections[other]) {
                debug!(index, other, "rejecting overlapping selections");
                return Err(EditError::OverlappingSelections { index, other });
            }
        }
        prev = Some(index);
    }

    Ok(order)
}

fn within_buffer<B: LineBuffer + ?Sized>(buffer: &B, selection: Selection) -> bool {
    let column_fits = |line: usize, column: usize| {
        buffer
            .line(line)
            .is_some_and(|text| column <= utf16_len(text))
    };

    column_fits(selection.start.line, selection.start.column)
        && column_fits(selection.end.line, selection.end.column)
}

/// Replaces the lines under one selection and returns the change in line count.
fn splice_selection<B, T>(
    buffer: &mut B,
    index: usize,
    selection: Selection,
    transform: &mut T,
) -> Result<isize, EditError>
where
    B: LineBuffer + ?Sized,
    T: TextTransform + ?Sized,
{
    let range = selection.start.line..selection.start.line + selection.line_span();
    let out_of_bounds = |line_count| EditError::SelectionOutOfBounds {
        index,
        selection,
        line_count,
    };

    let (code, span, terminated) = {
        let lines = buffer
            .lines(range.clone())
            .ok_or_else(|| out_of_bounds(buffer.line_count()))?;
        let last_line = lines
            .last()
            .ok_or_else(|| out_of_bounds(buffer.line_count()))?;

        // Units after the selection on its last line; the transform must not target them.
        let tail_length = utf16_len(last_line).saturating_sub(selection.end.column);
        let code = lines.concat();
        let end = utf16_len(&code) - tail_length;
        let start = selection.start.column.min(end);
        (code, Utf16Span::new(start, end), last_line.ends_with('\n'))
    };

    let changed = transform.transform(&code, span);
    let new_lines = resplit(&changed, terminated);

    let line_delta = new_lines.len() as isize - range.len() as isize;
    debug!(
        index,
        first_line = range.start,
        old_lines = range.len(),
        new_lines = new_lines.len(),
        span_start = span.start,
        span_end = span.end,
        "splicing selection"
    );
    buffer.replace_lines(range, new_lines);

    Ok(line_delta)
}

/// Splits transformed text back into buffer lines.
///
/// A block that ended in `\n` keeps ending in one, so the line after it stays a line of its
/// own. A block without a final `\n` (the buffer's last line) never gets one injected, and
/// keeps its trailing line even when that line is empty.
fn resplit(text: &str, terminated: bool) -> Vec<String> {
    let mut pieces = text.split('\n');
    // `split` yields one more piece than there are newlines.
    let last = pieces.next_back().unwrap_or_default().to_owned();
    let mut lines: Vec<String> = pieces.map(|piece| format!("{piece}\n")).collect();

    if !terminated {
        lines.push(last);
    } else if !last.is_empty() || lines.is_empty() {
        lines.push(last + "\n");
    }
    lines
}
