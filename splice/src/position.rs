use serde::{Deserialize, Serialize};

/// A caret location in a line buffer.
///
/// `line` is a 0-based line index. `column` is a 0-based offset into that line in UTF-16
/// code units, which is how editor hosts measure text.
///
/// Ordering is document order: line first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A contiguous selected range `[start, end)` in a line buffer.
///
/// Well-formed selections have `start <= end` in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-length selection at `at`.
    pub fn caret(at: Position) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Number of buffer lines the selection touches.
    pub fn line_span(&self) -> usize {
        self.end.line - self.start.line + 1
    }

    /// True when the two selections share any text. Touching ranges do not overlap.
    pub fn overlaps(&self, other: &Selection) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Half-open UTF-16 span into a string: `[start, end)`.
///
/// `start == end` is an empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Utf16Span {
    pub start: usize,
    pub end: usize,
}

impl Utf16Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
