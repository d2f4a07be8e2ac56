use crate::parsing::blocks::{parser::BlockParser, state::LineState, types::BlockStart};

/// `----`, `***` or `___`: three or more of one marker, spaces allowed.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_MARKERS: usize = 3;
    pub const MAX_INDENT: usize = 3;

    pub fn try_start(state: &LineState) -> Option<BlockStart> {
        if state.indent() > Self::MAX_INDENT {
            return None;
        }
        let content = state.content();
        if !Self::is_break(&content[state.next_non_space()..]) {
            return None;
        }
        Some(BlockStart::at_index(BlockParser::ThematicBreak, content.len()))
    }

    pub fn is_break(rest: &str) -> bool {
        let Some(marker) = rest.chars().next().filter(|c| Self::MARKERS.contains(c)) else {
            return false;
        };
        let mut count = 0;
        for c in rest.chars() {
            match c {
                ' ' | '\t' => {}
                c if c == marker => count += 1,
                _ => return false,
            }
        }
        count >= Self::MIN_MARKERS
    }
}
