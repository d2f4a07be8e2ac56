use crate::parsing::source::SourceLine;

use super::types::Resume;

/// Columns a tab advances to: the next multiple of this.
pub const TAB_STOP: usize = 4;

/// The host's view of the line currently being consumed.
///
/// Block parsers only read it; the builder moves `index`/`column` forward as
/// containers consume their markers and indentation.
#[derive(Debug, Clone)]
pub struct LineState {
    line: SourceLine,
    line_index: usize,
    /// Byte index of the first unconsumed character.
    index: usize,
    /// Visual column of `index` (tabs expanded).
    column: usize,
    next_non_space: usize,
    next_non_space_column: usize,
    indent: usize,
    blank: bool,
}

impl LineState {
    pub fn new(line: SourceLine, line_index: usize) -> Self {
        let mut state = Self {
            line,
            line_index,
            index: 0,
            column: 0,
            next_non_space: 0,
            next_non_space_column: 0,
            indent: 0,
            blank: true,
        };
        state.find_next_non_space();
        state
    }

    pub fn line(&self) -> &SourceLine {
        &self.line
    }

    pub fn content(&self) -> &str {
        self.line.content()
    }

    pub fn line_index(&self) -> usize {
        self.line_index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn next_non_space(&self) -> usize {
        self.next_non_space
    }

    pub fn next_non_space_column(&self) -> usize {
        self.next_non_space_column
    }

    /// Columns of whitespace between `column` and the next non-space character.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// True when nothing but whitespace is left on the line.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> SourceLine {
        self.line.substring(self.index, self.content().len())
    }

    /// Recomputes `next_non_space`, `indent` and `blank` from the current position.
    pub fn find_next_non_space(&mut self) {
        let bytes = self.line.content().as_bytes();
        let mut i = self.index;
        let mut col = self.column;
        while let Some(&b) = bytes.get(i) {
            match b {
                b' ' => col += 1,
                b'\t' => col += TAB_STOP - col % TAB_STOP,
                _ => break,
            }
            i += 1;
        }
        self.next_non_space = i;
        self.next_non_space_column = col;
        self.indent = col - self.column;
        self.blank = i >= bytes.len();
    }

    pub fn advance(&mut self, resume: Resume) {
        match resume {
            Resume::Index(index) => self.advance_to_index(index),
            Resume::Column(column) => self.advance_to_column(column),
        }
        self.find_next_non_space();
    }

    fn advance_to_index(&mut self, target: usize) {
        let target = target.min(self.content().len());
        while self.index < target {
            self.step();
        }
    }

    /// Moves forward until `column` reaches `target`; a tab that straddles
    /// the target is consumed whole.
    fn advance_to_column(&mut self, target: usize) {
        while self.column < target && self.index < self.content().len() {
            self.step();
        }
    }

    fn step(&mut self) {
        let Some(c) = self.content()[self.index..].chars().next() else {
            return;
        };
        self.column += match c {
            '\t' => TAB_STOP - self.column % TAB_STOP,
            _ => 1,
        };
        self.index += c.len_utf8();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(text: &str) -> LineState {
        LineState::new(SourceLine::new(text, None), 0)
    }

    #[test]
    fn indent_counts_spaces() {
        let s = state("   abc");
        assert_eq!(s.indent(), 3);
        assert_eq!(s.next_non_space(), 3);
        assert!(!s.is_blank());
    }

    #[test]
    fn tab_expands_to_stop() {
        let s = state(" \tx");
        assert_eq!(s.indent(), 4);
        assert_eq!(s.next_non_space(), 2);
        assert_eq!(s.next_non_space_column(), 4);
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(state("  \t ").is_blank());
        assert!(state("").is_blank());
    }

    #[test]
    fn advance_to_column_consumes_indent() {
        let mut s = state("    text");
        s.advance(Resume::Column(2));
        assert_eq!(s.index(), 2);
        assert_eq!(s.column(), 2);
        assert_eq!(s.indent(), 2);
        assert_eq!(s.rest().content(), "  text");
    }

    #[test]
    fn advance_to_column_swallows_straddling_tab() {
        let mut s = state("\tx");
        s.advance(Resume::Column(2));
        assert_eq!(s.index(), 1);
        assert_eq!(s.column(), 4);
    }

    #[test]
    fn advance_to_index_stops_at_end() {
        let mut s = state("abc");
        s.advance(Resume::Index(10));
        assert_eq!(s.index(), 3);
        assert!(s.is_blank());
    }
}
