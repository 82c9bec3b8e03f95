use splice::{Position, Selection, Utf16Span, rewrite_span};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn sel(start: (usize, usize), end: (usize, usize)) -> Selection {
    Selection::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

/// Wraps the selected text in brackets so the converted span is visible.
pub fn bracket(text: &str, span: Utf16Span) -> String {
    rewrite_span(text, span, |s| format!("[{s}]"))
}
