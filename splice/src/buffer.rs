use std::ops::Range;

/// A mutable, line-oriented text buffer as provided by an editor host.
///
/// Every line except possibly the last carries its trailing `\n`.
pub trait LineBuffer {
    fn line_count(&self) -> usize;

    fn line(&self, index: usize) -> Option<&str>;

    /// Lines in `range`, or `None` if the range runs past the end.
    fn lines(&self, range: Range<usize>) -> Option<Vec<&str>> {
        range.map(|index| self.line(index)).collect()
    }

    /// Replaces the lines in `range` with `lines` in one splice.
    ///
    /// The caller guarantees `range` lies within the buffer.
    fn replace_lines(&mut self, range: Range<usize>, lines: Vec<String>);
}

impl LineBuffer for Vec<String> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }

    fn replace_lines(&mut self, range: Range<usize>, lines: Vec<String>) {
        self.splice(range, lines);
    }
}

/// Splits `text` into buffer lines.
///
/// Each line keeps its `\n`. A final line without `\n` stays without one, and no empty
/// trailing line is produced after a final `\n`. Empty text yields a single empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let lines: Vec<String> = text.split_inclusive('\n').map(str::to_owned).collect();
    if lines.is_empty() {
        return vec![String::new()];
    }
    lines
}

pub fn join_lines<B: LineBuffer + ?Sized>(buffer: &B) -> String {
    let mut out = String::new();
    for index in 0..buffer.line_count() {
        if let Some(line) = buffer.line(index) {
            out.push_str(line);
        }
    }
    out
}
