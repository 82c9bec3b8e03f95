use thiserror::Error;

use crate::Selection;

/// Reasons a selection set is rejected before the buffer is touched.
///
/// `index` is the position of the offending selection in the set as passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("selection {index} ends before it starts: {selection:?}")]
    InvertedSelection { index: usize, selection: Selection },

    #[error("selection {index} lies outside the buffer ({line_count} lines): {selection:?}")]
    SelectionOutOfBounds {
        index: usize,
        selection: Selection,
        line_count: usize,
    },

    #[error("selection {index} overlaps selection {other}")]
    OverlappingSelections { index: usize, other: usize },
}
