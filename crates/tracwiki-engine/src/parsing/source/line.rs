use super::span::{SourceSpan, SourceSpans};

/// One line of input (without its terminator) and where it came from.
///
/// Recognizers only ever read lines; `substring` produces a new line whose
/// span is sliced to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    content: String,
    source_span: Option<SourceSpan>,
}

impl SourceLine {
    pub fn new(content: impl Into<String>, source_span: Option<SourceSpan>) -> Self {
        Self {
            content: content.into(),
            source_span,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source_span(&self) -> Option<SourceSpan> {
        self.source_span
    }

    /// Returns the byte range `[begin, end)` of this line as a new line.
    ///
    /// Offsets are clamped to the content. `end` moves back and `begin` moves
    /// forward to the nearest char boundary, so the result never reaches
    /// outside `[begin, end)` and the call never panics.
    pub fn substring(&self, begin: usize, end: usize) -> SourceLine {
        let end = floor_boundary(&self.content, end.min(self.content.len()));
        let begin = ceil_boundary(&self.content, begin.min(end));
        let source_span = self
            .source_span
            .and_then(|span| span.subspan(begin, end))
            .filter(|span| span.length > 0);
        SourceLine {
            content: self.content[begin..end].to_owned(),
            source_span,
        }
    }
}

fn floor_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(s: &str, mut i: usize) -> usize {
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// An ordered run of [`SourceLine`]s, e.g. the content of a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLines {
    lines: Vec<SourceLine>,
}

impl SourceLines {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(line: SourceLine) -> Self {
        Self { lines: vec![line] }
    }

    pub fn push(&mut self, line: SourceLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined with `\n`.
    pub fn content(&self) -> String {
        self.lines
            .iter()
            .map(SourceLine::content)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn source_spans(&self) -> SourceSpans {
        let mut spans = SourceSpans::empty();
        for span in self.lines.iter().filter_map(SourceLine::source_span) {
            spans.add(span);
        }
        spans
    }
}
