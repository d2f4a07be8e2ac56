use crate::parsing::{
    blocks::{
        parser::BlockParser,
        state::LineState,
        types::{BlockContinue, BlockStart},
    },
    inline::escape::unescape_string,
    source::SourceLine,
    tree::FencedCode,
};

/// Trac code block: `{{{` opens, `}}}` closes, an optional `#!tag` line
/// right after the opener names the syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFenceParser {
    fence_indent: usize,
    /// `None` until the first line has been seen.
    syntax: Option<String>,
    code: String,
}

impl CodeFenceParser {
    pub const OPEN: &'static str = "{{{";
    pub const CLOSE: &'static str = "}}}";
    pub const SYNTAX_PREFIX: &'static str = "#!";

    pub fn new(fence_indent: usize) -> Self {
        Self {
            fence_indent,
            syntax: None,
            code: String::new(),
        }
    }

    pub fn try_start(state: &LineState) -> Option<BlockStart> {
        let nns = state.next_non_space();
        if !state.content()[nns..].starts_with(Self::OPEN) {
            return None;
        }
        Some(BlockStart::at_index(
            BlockParser::CodeFence(Self::new(state.indent())),
            nns + Self::OPEN.len(),
        ))
    }

    /// Any line whose first non-space text is `}}}` ends the block; everything
    /// else is taken verbatim from the current position.
    pub fn try_continue(&self, state: &LineState) -> BlockContinue {
        if state.content()[state.next_non_space()..].starts_with(Self::CLOSE) {
            BlockContinue::Finished
        } else {
            BlockContinue::at_index(state.index())
        }
    }

    pub fn add_line(&mut self, line: &SourceLine) {
        let content = line.content();
        if self.syntax.is_some() {
            self.append(content);
            return;
        }
        match parse_syntax(content) {
            Some(tag) => self.syntax = Some(tag.to_owned()),
            None => {
                self.syntax = Some(String::new());
                if !content.is_empty() {
                    self.append(content);
                }
            }
        }
    }

    fn append(&mut self, content: &str) {
        self.code.push_str(content);
        self.code.push('\n');
    }

    pub fn close(self) -> FencedCode {
        let info = self.syntax.unwrap_or_default();
        FencedCode {
            fence_char: '{',
            fence_length: Self::OPEN.len(),
            fence_indent: self.fence_indent,
            info: unescape_string(info.trim()),
            literal: self.code,
        }
    }
}

/// `#!tag` after optional whitespace; the tag runs to the next whitespace.
fn parse_syntax(line: &str) -> Option<&str> {
    let tag = line
        .trim_start()
        .strip_prefix(CodeFenceParser::SYNTAX_PREFIX)?;
    let end = tag.find(char::is_whitespace).unwrap_or(tag.len());
    (end > 0).then(|| &tag[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn fence(lines: &[&str]) -> FencedCode {
        let mut parser = CodeFenceParser::new(0);
        for line in lines {
            parser.add_line(&SourceLine::new(*line, None));
        }
        parser.close()
    }

    #[rstest]
    #[case("#!python", Some("python"))]
    #[case("  #!sh extra words", Some("sh"))]
    #[case("#!", None)]
    #[case("#! python", None)]
    #[case("print()", None)]
    fn syntax_tag(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_syntax(line), expected);
    }

    #[test]
    fn first_line_tag_becomes_info() {
        let code = fence(&["#!python", "  hello = lambda: \"world\"", "  "]);
        assert_eq!(code.info, "python");
        assert_eq!(code.literal, "  hello = lambda: \"world\"\n  \n");
    }

    #[test]
    fn empty_opening_remainder_is_dropped() {
        let code = fence(&["", "x", ""]);
        assert_eq!(code.info, "");
        assert_eq!(code.literal, "x\n\n");
    }

    #[test]
    fn text_after_opener_is_code() {
        let code = fence(&["inline", "next"]);
        assert_eq!(code.literal, "inline\nnext\n");
    }

    #[test]
    fn tag_only_recognized_on_first_line() {
        let code = fence(&["", "#!python"]);
        assert_eq!(code.info, "");
        assert_eq!(code.literal, "#!python\n");
    }

    #[test]
    fn info_is_unescaped() {
        let code = fence(&["#!c\\+\\+"]);
        assert_eq!(code.info, "c++");
    }

    #[test]
    fn closer_may_be_indented() {
        let parser = CodeFenceParser::new(0);
        let state = LineState::new(SourceLine::new("   }}} trailing", None), 0);
        assert_eq!(parser.try_continue(&state), BlockContinue::Finished);
        let state = LineState::new(SourceLine::new("  code", None), 0);
        assert_eq!(parser.try_continue(&state), BlockContinue::at_index(0));
    }

    #[test]
    fn start_resumes_after_opener() {
        let state = LineState::new(SourceLine::new("  {{{#!sh", None), 0);
        let start = CodeFenceParser::try_start(&state).unwrap();
        assert_eq!(start.resume, crate::parsing::blocks::types::Resume::Index(5));
    }
}
