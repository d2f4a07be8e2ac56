use crate::parsing::blocks::{
    parser::BlockParser,
    state::LineState,
    types::{BlockContinue, BlockStart},
};

/// `>` citation. Each marker on a line is one nesting level, so
/// `>> text` is a quote inside a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuoteParser;

impl BlockQuoteParser {
    pub const PREFIX: char = '>';
    /// Deeper indentation than this is not a marker.
    pub const MAX_INDENT: usize = 3;

    /// Column right after the marker and one optional space or tab.
    fn content_column(state: &LineState) -> Option<usize> {
        let nns = state.next_non_space();
        let bytes = state.content().as_bytes();
        if state.indent() > Self::MAX_INDENT || bytes.get(nns) != Some(&(Self::PREFIX as u8)) {
            return None;
        }
        let mut column = state.next_non_space_column() + 1;
        if matches!(bytes.get(nns + 1), Some(b' ' | b'\t')) {
            column += 1;
        }
        Some(column)
    }

    pub fn try_start(state: &LineState) -> Option<BlockStart> {
        let column = Self::content_column(state)?;
        Some(BlockStart::at_column(BlockParser::BlockQuote(Self), column))
    }

    pub fn try_continue(&self, state: &LineState) -> BlockContinue {
        match Self::content_column(state) {
            Some(column) => BlockContinue::at_column(column),
            None => BlockContinue::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::SourceLine;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn state(text: &str) -> LineState {
        LineState::new(SourceLine::new(text, None), 0)
    }

    #[rstest]
    #[case("> hello", Some(2))]
    #[case(">hello", Some(1))]
    #[case(">> nested", Some(1))]
    #[case("   > indented", Some(5))]
    #[case("    > too deep", None)]
    #[case("hello", None)]
    fn marker(#[case] line: &str, #[case] column: Option<usize>) {
        assert_eq!(BlockQuoteParser::content_column(&state(line)), column);
    }

    #[test]
    fn continuation_needs_marker() {
        assert_eq!(
            BlockQuoteParser.try_continue(&state("> more")),
            BlockContinue::at_column(2)
        );
        assert_eq!(
            BlockQuoteParser.try_continue(&state("lazy")),
            BlockContinue::None
        );
    }
}
