use crate::{Position, Selection, Utf16Span, rewrite_span};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn sel(start: (usize, usize), end: (usize, usize)) -> Selection {
    Selection::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

/// One `index: "line"` row per buffer line, so newlines stay visible in snapshots.
pub fn render(buffer: &[String]) -> String {
    buffer
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{i}: {line:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Appends `.0` to the selected text, turning a selected integer literal into a float.
pub fn append_fraction(text: &str, span: Utf16Span) -> String {
    rewrite_span(text, span, |s| format!("{s}.0"))
}
