use crate::parsing::blocks::{
    parser::BlockParser,
    state::LineState,
    types::{BlockContinue, BlockStart},
};

/// Trac citation by indentation: a line indented two or more columns opens
/// a quote that stays open while later lines are indented at least as far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentedQuoteParser {
    /// Column of the first content character on the opening line.
    column: usize,
}

impl IndentedQuoteParser {
    pub const MIN_INDENT: usize = 2;

    fn content_column(state: &LineState) -> Option<usize> {
        let is_quote = state.indent() >= Self::MIN_INDENT && !state.is_blank();
        is_quote.then(|| state.next_non_space_column())
    }

    pub fn try_start(state: &LineState) -> Option<BlockStart> {
        let column = Self::content_column(state)?;
        Some(BlockStart::at_column(
            BlockParser::IndentedQuote(Self { column }),
            column,
        ))
    }

    /// Deeper lines resume at the recorded column, so their surplus
    /// indentation is left for a nested quote.
    pub fn try_continue(&self, state: &LineState) -> BlockContinue {
        match Self::content_column(state) {
            Some(column) if column >= self.column => BlockContinue::at_column(self.column),
            _ => BlockContinue::None,
        }
    }

    pub fn column(&self) -> usize {
        self.column
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
    #[case("  text", Some(2))]
    #[case("    text", Some(4))]
    #[case("\ttext", Some(4))]
    #[case(" text", None)]
    #[case("text", None)]
    #[case("    ", None)]
    fn start(#[case] line: &str, #[case] column: Option<usize>) {
        let start = IndentedQuoteParser::try_start(&state(line));
        let column_of = |s: BlockStart| match s.parser {
            BlockParser::IndentedQuote(q) => q.column(),
            other => panic!("unexpected parser {other:?}"),
        };
        assert_eq!(start.map(column_of), column);
    }

    #[rstest]
    #[case("  same", BlockContinue::at_column(2))]
    #[case("      deeper", BlockContinue::at_column(2))]
    #[case(" shallower", BlockContinue::None)]
    #[case("", BlockContinue::None)]
    fn continuation_from_column_two(#[case] line: &str, #[case] expected: BlockContinue) {
        let quote = IndentedQuoteParser { column: 2 };
        assert_eq!(quote.try_continue(&state(line)), expected);
    }

    #[test]
    fn continuation_requires_opening_depth() {
        let quote = IndentedQuoteParser { column: 4 };
        assert_eq!(quote.try_continue(&state("  two")), BlockContinue::None);
        assert_eq!(
            quote.try_continue(&state("    four")),
            BlockContinue::at_column(4)
        );
    }
}
