use crate::parsing::{
    blocks::{state::LineState, types::BlockContinue},
    source::{SourceLine, SourceLines},
};

/// Fallback leaf: consecutive non-blank lines no other block claimed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphParser {
    lines: SourceLines,
}

impl ParagraphParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_continue(&self, state: &LineState) -> BlockContinue {
        if state.is_blank() {
            BlockContinue::None
        } else {
            BlockContinue::at_index(state.index())
        }
    }

    /// Leading whitespace is stripped from every line.
    pub fn add_line(&mut self, line: &SourceLine) {
        let content = line.content();
        let lead = content.len() - content.trim_start_matches([' ', '\t']).len();
        self.lines.push(line.substring(lead, content.len()));
    }

    pub fn lines(&self) -> &SourceLines {
        &self.lines
    }

    pub fn into_lines(self) -> SourceLines {
        self.lines
    }
}
