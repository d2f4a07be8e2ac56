/// A byte range `[start, end)` into the rope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Provenance of a run of characters: which line, where on that line, and
/// where in the whole input.
///
/// Columns and lengths are byte offsets; every marker character the
/// recognizers look at is ASCII, so byte positions never split a character
/// that the parser itself produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// 0-based line index.
    pub line_index: usize,
    /// 0-based byte offset within the line.
    pub column_index: usize,
    /// 0-based byte offset within the whole input.
    pub input_index: usize,
    /// Length in bytes.
    pub length: usize,
}

impl SourceSpan {
    pub fn new(line_index: usize, column_index: usize, input_index: usize, length: usize) -> Self {
        Self {
            line_index,
            column_index,
            input_index,
            length,
        }
    }

    /// Slices this span to the relative byte range `[begin, end)`.
    ///
    /// Returns `None` when the range does not fit inside the span.
    #[must_use]
    pub fn subspan(&self, begin: usize, end: usize) -> Option<SourceSpan> {
        if begin > end || end > self.length {
            return None;
        }
        Some(SourceSpan {
            line_index: self.line_index,
            column_index: self.column_index + begin,
            input_index: self.input_index + begin,
            length: end - begin,
        })
    }

    /// Byte range of this span in the input.
    #[must_use]
    pub fn input_range(&self) -> Span {
        Span {
            start: self.input_index,
            end: self.input_index + self.length,
        }
    }

    fn column_end(&self) -> usize {
        self.column_index + self.length
    }
}

/// An ordered list of [`SourceSpan`]s that stays additive: a span that
/// directly continues the previous one on the same line is merged into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSpans {
    spans: Vec<SourceSpan>,
}

impl SourceSpans {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[SourceSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// The only span, if there is exactly one.
    pub fn single(&self) -> Option<SourceSpan> {
        match self.spans.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn add(&mut self, span: SourceSpan) {
        if let Some(last) = self.spans.last_mut() {
            if last.line_index == span.line_index && last.column_end() == span.column_index {
                last.length += span.length;
                return;
            }
        }
        self.spans.push(span);
    }

    pub fn add_all<'a>(&mut self, spans: impl IntoIterator<Item = &'a SourceSpan>) {
        for span in spans {
            self.add(*span);
        }
    }
}

impl<'a> IntoIterator for &'a SourceSpans {
    type Item = &'a SourceSpan;
    type IntoIter = std::slice::Iter<'a, SourceSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

impl From<SourceSpan> for SourceSpans {
    fn from(span: SourceSpan) -> Self {
        Self { spans: vec![span] }
    }
}
