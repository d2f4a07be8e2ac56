use crate::parsing::{
    blocks::{parser::BlockParser, state::LineState, types::BlockStart},
    inline::Scanner,
    source::{SourceLine, SourceLines},
};

/// Trac heading: `= Title =`, `== Title ==` ... up to six markers.
///
/// The closing run is optional and its length is not checked against the
/// opening run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingParser {
    level: u8,
    content: SourceLines,
}

impl HeadingParser {
    pub const MARKER: char = '=';
    pub const MAX_LEVEL: usize = 6;

    pub fn try_start(state: &LineState) -> Option<BlockStart> {
        let content = state.content();
        let nns = state.next_non_space();
        if !content[nns..].starts_with(Self::MARKER) {
            return None;
        }
        let parser = Self::parse(&state.line().substring(nns, content.len()))?;
        Some(BlockStart::at_index(
            BlockParser::Heading(parser),
            content.len(),
        ))
    }

    /// Parses a line that starts at the opening marker run.
    pub fn parse(line: &SourceLine) -> Option<Self> {
        let lines = SourceLines::of(line.clone());
        let mut scanner = Scanner::new(&lines);
        let level = scanner.match_multiple(Self::MARKER);
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        if !matches!(scanner.peek(), Some(' ' | '\t')) {
            return None;
        }
        scanner.whitespace();

        let start = scanner.position();
        let mut end = start;
        // A marker run can only close the heading after whitespace (or right
        // after the opening whitespace).
        let mut eq_can_end = true;
        while let Some(c) = scanner.peek() {
            match c {
                Self::MARKER if eq_can_end => {
                    scanner.match_multiple(Self::MARKER);
                    let ws = scanner.whitespace();
                    if scanner.has_next() {
                        end = scanner.position();
                    }
                    eq_can_end = ws > 0;
                }
                ' ' | '\t' => {
                    eq_can_end = true;
                    scanner.next();
                }
                _ => {
                    eq_can_end = false;
                    scanner.next();
                    end = scanner.position();
                }
            }
        }

        let source = scanner.source(start, end);
        let content = if source.content().is_empty() {
            SourceLines::empty()
        } else {
            source
        };
        Some(Self {
            level: level as u8,
            content,
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn content(&self) -> &SourceLines {
        &self.content
    }

    pub fn into_content(self) -> SourceLines {
        self.content
    }
}
