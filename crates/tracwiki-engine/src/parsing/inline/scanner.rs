use crate::parsing::source::{SourceLine, SourceLines};

/// A position in multi-line content: line number and byte index in that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub index: usize,
}

/// A character scanner over [`SourceLines`] with position tracking.
///
/// Line boundaries read as a single `'\n'`, so callers can scan multi-line
/// content as if it were one string while positions stay line-relative.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    lines: &'a [SourceLine],
    line: usize,
    index: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner at the start of `lines`.
    pub fn new(lines: &'a SourceLines) -> Self {
        Self {
            lines: lines.lines(),
            line: 0,
            index: 0,
        }
    }

    fn current(&self) -> &'a str {
        self.lines.get(self.line).map_or("", |l| l.content())
    }

    /// Peeks at the current character without advancing.
    ///
    /// Returns `'\n'` at the end of every line but the last.
    pub fn peek(&self) -> Option<char> {
        let line = self.current();
        if self.index < line.len() {
            line[self.index..].chars().next()
        } else if self.line + 1 < self.lines.len() {
            Some('\n')
        } else {
            None
        }
    }

    /// The character before the current position, `'\n'` across line starts.
    pub fn peek_previous(&self) -> Option<char> {
        if self.index > 0 {
            self.current()[..self.index].chars().next_back()
        } else if self.line > 0 {
            Some('\n')
        } else {
            None
        }
    }

    /// Returns true while there is anything left to read.
    pub fn has_next(&self) -> bool {
        self.peek().is_some()
    }

    /// Advances by one character (or over a line break).
    pub fn next(&mut self) {
        let line = self.current();
        if let Some(c) = line[self.index.min(line.len())..].chars().next() {
            self.index += c.len_utf8();
        } else if self.line + 1 < self.lines.len() {
            self.line += 1;
            self.index = 0;
        }
    }

    /// Consumes `c` if it is next.
    pub fn next_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes a run of `c`, returning its length.
    pub fn match_multiple(&mut self, c: char) -> usize {
        let mut count = 0;
        while self.next_char(c) {
            count += 1;
        }
        count
    }

    /// Consumes spaces, tabs, vertical tabs and form feeds on the current
    /// line, returning how many.
    pub fn whitespace(&mut self) -> usize {
        let mut count = 0;
        while let Some(' ' | '\t' | '\u{0B}' | '\u{0C}') = self.peek() {
            self.next();
            count += 1;
        }
        count
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            index: self.index,
        }
    }

    /// Restores a position previously returned by [`position`](Self::position).
    pub fn set_position(&mut self, position: Position) {
        self.line = position.line;
        self.index = position.index;
    }

    /// The content between two positions, spans included.
    pub fn source(&self, start: Position, end: Position) -> SourceLines {
        let mut out = SourceLines::empty();
        if self.lines.is_empty() || end <= start {
            return out;
        }
        if start.line == end.line {
            out.push(self.lines[start.line].substring(start.index, end.index));
            return out;
        }
        let first = &self.lines[start.line];
        out.push(first.substring(start.index, first.content().len()));
        for line in &self.lines[start.line + 1..end.line] {
            out.push(line.clone());
        }
        out.push(self.lines[end.line].substring(0, end.index));
        out
    }

    /// The text between two positions, line breaks as `'\n'`.
    pub fn text(&self, start: Position, end: Position) -> String {
        self.source(start, end).content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::SourceSpan;
    use pretty_assertions::assert_eq;

    fn lines(texts: &[&str]) -> SourceLines {
        let mut out = SourceLines::empty();
        let mut input = 0;
        for (i, t) in texts.iter().enumerate() {
            out.push(SourceLine::new(*t, Some(SourceSpan::new(i, 0, input, t.len()))));
            input += t.len() + 1;
        }
        out
    }

    #[test]
    fn scanner_basics() {
        let content = lines(&["hello"]);
        let mut s = Scanner::new(&content);
        assert_eq!(s.peek(), Some('h'));
        assert_eq!(s.peek_previous(), None);
        s.next();
        assert_eq!(s.position(), Position { line: 0, index: 1 });
        assert_eq!(s.peek_previous(), Some('h'));
    }

    #[test]
    fn line_break_reads_as_newline() {
        let content = lines(&["ab", "c"]);
        let mut s = Scanner::new(&content);
        s.next();
        s.next();
        assert_eq!(s.peek(), Some('\n'));
        s.next();
        assert_eq!(s.position(), Position { line: 1, index: 0 });
        assert_eq!(s.peek_previous(), Some('\n'));
        s.next();
        assert!(!s.has_next());
    }

    #[test]
    fn empty_input() {
        let content = SourceLines::empty();
        let mut s = Scanner::new(&content);
        assert!(!s.has_next());
        s.next();
        assert_eq!(s.position(), Position::default());
        assert!(s.source(Position::default(), Position::default()).is_empty());
    }

    #[test]
    fn match_multiple_counts_run() {
        let content = lines(&["'''x"]);
        let mut s = Scanner::new(&content);
        assert_eq!(s.match_multiple('\''), 3);
        assert_eq!(s.peek(), Some('x'));
        assert_eq!(s.match_multiple('\''), 0);
    }

    #[test]
    fn whitespace_stays_on_line() {
        let content = lines(&["a  ", "b"]);
        let mut s = Scanner::new(&content);
        s.next();
        assert_eq!(s.whitespace(), 2);
        assert_eq!(s.peek(), Some('\n'));
    }

    #[test]
    fn multibyte_characters() {
        let content = lines(&["é'"]);
        let mut s = Scanner::new(&content);
        s.next();
        assert_eq!(s.position().index, 2);
        assert_eq!(s.peek(), Some('\''));
        assert_eq!(s.peek_previous(), Some('é'));
    }

    #[test]
    fn source_across_lines_keeps_spans() {
        let content = lines(&["one two", "three"]);
        let s = Scanner::new(&content);
        let src = s.source(Position { line: 0, index: 4 }, Position { line: 1, index: 3 });
        assert_eq!(src.content(), "two\nthr");
        assert_eq!(
            src.source_spans().as_slice(),
            &[SourceSpan::new(0, 4, 4, 3), SourceSpan::new(1, 0, 8, 3)]
        );
    }
}
