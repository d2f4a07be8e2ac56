use crate::parsing::{
    inline::scanner::Scanner,
    source::SourceSpans,
};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them,
/// Trac markup included.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
}

/// Attempts to parse a code span at the current position.
///
/// The closing run must have the same length as the opening one. Returns
/// the literal and the spans of the whole construct, or `None` with the
/// scanner restored when the span is never closed.
pub fn try_parse_code_span(scanner: &mut Scanner<'_>) -> Option<(String, SourceSpans)> {
    let start = scanner.position();
    let opening = scanner.match_multiple(CodeSpan::TICK);
    if opening == 0 {
        return None;
    }
    let after_opening = scanner.position();

    while let Some(c) = scanner.peek() {
        if c != CodeSpan::TICK {
            scanner.next();
            continue;
        }
        let before_closing = scanner.position();
        if scanner.match_multiple(CodeSpan::TICK) == opening {
            let literal = normalize(&scanner.text(after_opening, before_closing));
            let spans = scanner.source(start, scanner.position()).source_spans();
            return Some((literal, spans));
        }
    }

    scanner.set_position(start);
    None
}

/// Line breaks become spaces; one leading and one trailing space are
/// stripped when both are present and the content is not all spaces.
fn normalize(raw: &str) -> String {
    let content = raw.replace('\n', " ");
    let bytes = content.as_bytes();
    if bytes.len() >= 3
        && bytes[0] == b' '
        && bytes[bytes.len() - 1] == b' '
        && bytes.iter().any(|b| *b != b' ')
    {
        content[1..content.len() - 1].to_owned()
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::{SourceLine, SourceLines};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(text: &str) -> Option<String> {
        let lines = SourceLines::of(SourceLine::new(text, None));
        let mut scanner = Scanner::new(&lines);
        try_parse_code_span(&mut scanner).map(|(literal, _)| literal)
    }

    #[rstest]
    #[case("`code`", Some("code"))]
    #[case("`{{{-}}}`", Some("{{{-}}}"))]
    #[case("`''no wiki''`", Some("''no wiki''"))]
    #[case("`` a`b ``", Some("a`b"))]
    #[case("` `", Some(" "))]
    #[case("`unclosed", None)]
    #[case("``mismatch`", None)]
    fn parses(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse(input).as_deref(), expected);
    }

    #[test]
    fn failure_restores_position() {
        let lines = SourceLines::of(SourceLine::new("`open", None));
        let mut scanner = Scanner::new(&lines);
        assert!(try_parse_code_span(&mut scanner).is_none());
        assert_eq!(scanner.position().index, 0);
    }

    #[test]
    fn spans_cover_backticks() {
        let lines = SourceLines::of(SourceLine::new(
            "x `y` z",
            Some(crate::parsing::source::SourceSpan::new(0, 0, 0, 7)),
        ));
        let mut scanner = Scanner::new(&lines);
        scanner.next();
        scanner.next();
        let (_, spans) = try_parse_code_span(&mut scanner).unwrap();
        assert_eq!(
            spans.as_slice(),
            &[crate::parsing::source::SourceSpan::new(0, 2, 2, 3)]
        );
    }
}
