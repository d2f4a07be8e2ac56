use super::{
    kinds::{BlockQuoteParser, CodeFenceParser, HeadingParser, IndentedQuoteParser, ThematicBreak},
    state::LineState,
    types::BlockStart,
};

/// Asks each block recognizer, in registration order, whether a block
/// starts at the current position. First match wins.
///
/// Headings and code fences come before the indented quote so that an
/// indented `= Title =` or `{{{` is not swallowed as a citation.
pub fn try_start(state: &LineState) -> Option<BlockStart> {
    HeadingParser::try_start(state)
        .or_else(|| CodeFenceParser::try_start(state))
        .or_else(|| IndentedQuoteParser::try_start(state))
        .or_else(|| BlockQuoteParser::try_start(state))
        .or_else(|| ThematicBreak::try_start(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::SourceLine;
    use rstest::rstest;

    fn started(line: &str) -> Option<&'static str> {
        let state = LineState::new(SourceLine::new(line, None), 0);
        try_start(&state).map(|s| s.parser.name())
    }

    #[rstest]
    #[case("= Title =", Some("heading"))]
    #[case("  = Title =", Some("heading"))]
    #[case("{{{", Some("code fence"))]
    #[case("  {{{", Some("code fence"))]
    #[case("  quoted", Some("indented quote"))]
    #[case("> cited", Some("block quote"))]
    #[case("  > cited", Some("indented quote"))]
    #[case("----", Some("thematic break"))]
    #[case("plain", None)]
    #[case("==Not a heading", None)]
    fn precedence(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(started(line), expected);
    }
}
