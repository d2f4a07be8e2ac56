use std::collections::HashMap;

use log::trace;

use crate::parsing::{
    source::{SourceLines, SourceSpans},
    tree::{NodeId, NodeKind, Tree},
};

use super::{
    delimiter::{DelimiterProcessor, DelimiterRun},
    escape::is_escapable,
    kinds::{CodeSpan, processor_for, try_parse_code_span},
    scanner::{Position, Scanner},
};

/// Parses the inline content of `block` and appends the resulting nodes.
///
/// Text, soft line breaks, backslash escapes and code spans are handled
/// directly; runs of registered delimiter characters go on a stack that is
/// resolved once the whole content has been scanned. Adjacent text nodes are
/// merged at the end.
pub fn parse_inlines(tree: &mut Tree, block: NodeId, content: &SourceLines) {
    let mut parser = InlineParser {
        tree,
        block,
        delimiters: Vec::new(),
        last_delimiter: None,
    };
    parser.parse(content);
}

struct InlineParser<'t> {
    tree: &'t mut Tree,
    block: NodeId,
    /// Delimiter runs in scan order; `previous`/`next` link the live ones.
    delimiters: Vec<DelimiterRun>,
    last_delimiter: Option<usize>,
}

impl InlineParser<'_> {
    fn parse(&mut self, content: &SourceLines) {
        let mut scanner = Scanner::new(content);
        while let Some(c) = scanner.peek() {
            match c {
                '\n' => self.parse_line_break(&mut scanner),
                '\\' => self.parse_backslash(&mut scanner),
                CodeSpan::TICK => self.parse_code_span(&mut scanner),
                c => match processor_for(c) {
                    Some(processor) => self.parse_delimiters(&mut scanner, processor),
                    None => self.parse_text(&mut scanner),
                },
            }
        }
        self.process_delimiters();
        merge_text_nodes(self.tree, self.block);
    }

    fn append(&mut self, kind: NodeKind, spans: SourceSpans) -> NodeId {
        let node = self.tree.create_with_spans(kind, spans);
        self.tree.append_child(self.block, node);
        node
    }

    fn parse_line_break(&mut self, scanner: &mut Scanner<'_>) {
        scanner.next();
        self.append(NodeKind::SoftBreak, SourceSpans::empty());
        scanner.whitespace();
    }

    fn parse_backslash(&mut self, scanner: &mut Scanner<'_>) {
        let start = scanner.position();
        scanner.next();
        let text = match scanner.peek() {
            Some(c) if c != '\n' && is_escapable(c) => {
                scanner.next();
                c.to_string()
            }
            _ => "\\".to_owned(),
        };
        let spans = scanner.source(start, scanner.position()).source_spans();
        self.append(NodeKind::Text(text), spans);
    }

    fn parse_code_span(&mut self, scanner: &mut Scanner<'_>) {
        if let Some((literal, spans)) = try_parse_code_span(scanner) {
            self.append(NodeKind::Code(literal), spans);
            return;
        }
        // Unclosed: the opening run is literal text.
        let start = scanner.position();
        let count = scanner.match_multiple(CodeSpan::TICK);
        let spans = scanner.source(start, scanner.position()).source_spans();
        self.append(NodeKind::Text(CodeSpan::TICK.to_string().repeat(count)), spans);
    }

    /// Plain text up to the next special character. Trailing spaces before a
    /// line break or the end of the content are dropped.
    fn parse_text(&mut self, scanner: &mut Scanner<'_>) {
        let start = scanner.position();
        scanner.next();
        while let Some(c) = scanner.peek() {
            if is_special(c) {
                break;
            }
            scanner.next();
        }
        let mut end = scanner.position();
        if matches!(scanner.peek(), None | Some('\n')) {
            let text = scanner.text(start, end);
            end.index = start.index + text.trim_end_matches([' ', '\t']).len();
        }
        if end > start {
            let spans = scanner.source(start, end).source_spans();
            self.append(NodeKind::Text(scanner.text(start, end)), spans);
        }
    }

    fn parse_delimiters(&mut self, scanner: &mut Scanner<'_>, processor: &dyn DelimiterProcessor) {
        let c = processor.opening_char();
        let start = scanner.position();
        let before = scanner.peek_previous().unwrap_or('\n');
        let count = scanner.match_multiple(c);
        let after = scanner.peek().unwrap_or('\n');

        if count < processor.min_length() {
            let spans = scanner.source(start, scanner.position()).source_spans();
            self.append(NodeKind::Text(c.to_string().repeat(count)), spans);
            return;
        }

        // One text node per marker so processors can take them one by one.
        let mut characters = Vec::with_capacity(count);
        for i in 0..count {
            let from = Position {
                line: start.line,
                index: start.index + i * c.len_utf8(),
            };
            let to = Position {
                index: from.index + c.len_utf8(),
                ..from
            };
            let spans = scanner.source(from, to).source_spans();
            characters.push(self.append(NodeKind::Text(c.to_string()), spans));
        }

        let (can_open, can_close) = flanking(c, before, after);
        if !(can_open || can_close) {
            return;
        }
        let index = self.delimiters.len();
        self.delimiters.push(DelimiterRun {
            characters,
            delimiter_char: c,
            original_length: count,
            can_open,
            can_close,
            previous: self.last_delimiter,
            next: None,
        });
        if let Some(previous) = self.last_delimiter {
            self.delimiters[previous].next = Some(index);
        }
        self.last_delimiter = Some(index);
    }

    /// Pairs closers with the nearest matching opener, bottom of the stack
    /// first, until no closer can be matched.
    fn process_delimiters(&mut self) {
        // Per character: openers at or below this entry are known not to match.
        let mut openers_bottom: HashMap<char, usize> = HashMap::new();

        let mut closer = self.last_delimiter;
        while let Some(c) = closer.and_then(|c| self.delimiters[c].previous) {
            closer = Some(c);
        }

        while let Some(c) = closer {
            let delimiter_char = self.delimiters[c].delimiter_char;
            let processor = match processor_for(delimiter_char) {
                Some(p) if self.delimiters[c].can_close => p,
                _ => {
                    closer = self.delimiters[c].next;
                    continue;
                }
            };
            let opening_char = processor.opening_char();
            let bottom = openers_bottom.get(&delimiter_char).copied();

            let mut used = 0;
            let mut opener_found = None;
            let mut potential_opener = false;
            let mut opener = self.delimiters[c].previous;
            while let Some(o) = opener {
                if Some(o) == bottom {
                    break;
                }
                let run = &self.delimiters[o];
                if run.can_open && run.delimiter_char == opening_char {
                    potential_opener = true;
                    used = processor.process(self.tree, &self.delimiters[o], &self.delimiters[c]);
                    if used > 0 {
                        opener_found = Some(o);
                        break;
                    }
                }
                opener = self.delimiters[o].previous;
            }

            let Some(o) = opener_found else {
                let next = self.delimiters[c].next;
                if !potential_opener {
                    if let Some(previous) = self.delimiters[c].previous {
                        openers_bottom.insert(delimiter_char, previous);
                    }
                    if !self.delimiters[c].can_open {
                        self.remove_delimiter(c);
                    }
                }
                closer = next;
                continue;
            };

            trace!("matched {used} x {delimiter_char:?}");
            let opening = &mut self.delimiters[o].characters;
            for id in opening.drain(opening.len() - used..) {
                self.tree.unlink(id);
            }
            for id in self.delimiters[c].characters.drain(..used) {
                self.tree.unlink(id);
            }
            self.remove_delimiters_between(o, c);

            if self.delimiters[o].characters.is_empty() {
                self.remove_delimiter(o);
            }
            if self.delimiters[c].characters.is_empty() {
                let next = self.delimiters[c].next;
                self.remove_delimiter(c);
                closer = next;
            }
        }

        self.delimiters.clear();
        self.last_delimiter = None;
    }

    fn remove_delimiters_between(&mut self, opener: usize, closer: usize) {
        let mut current = self.delimiters[closer].previous;
        while let Some(d) = current {
            if d == opener {
                break;
            }
            current = self.delimiters[d].previous;
            self.remove_delimiter(d);
        }
    }

    fn remove_delimiter(&mut self, index: usize) {
        let (previous, next) = {
            let run = &self.delimiters[index];
            (run.previous, run.next)
        };
        if let Some(p) = previous {
            self.delimiters[p].next = next;
        }
        match next {
            Some(n) => self.delimiters[n].previous = previous,
            None => self.last_delimiter = previous,
        }
    }
}

fn is_special(c: char) -> bool {
    matches!(c, '\n' | '\\' | CodeSpan::TICK) || processor_for(c).is_some()
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || !(c.is_alphanumeric() || c.is_whitespace() || c.is_control())
}

/// Left/right flanking rules deciding whether a run may open and/or close.
fn flanking(c: char, before: char, after: char) -> (bool, bool) {
    let before_whitespace = before.is_whitespace();
    let before_punctuation = is_punctuation(before);
    let after_whitespace = after.is_whitespace();
    let after_punctuation = is_punctuation(after);

    let left = !after_whitespace && (!after_punctuation || before_whitespace || before_punctuation);
    let right = !before_whitespace && (!before_punctuation || after_whitespace || after_punctuation);

    if c == '_' {
        (left && (!right || before_punctuation), right && (!left || after_punctuation))
    } else {
        (left, right)
    }
}

/// Joins adjacent `Text` children, recursively. Their spans are concatenated.
pub fn merge_text_nodes(tree: &mut Tree, parent: NodeId) {
    let mut child = tree.first_child(parent);
    while let Some(c) = child {
        if matches!(tree.kind(c), NodeKind::Text(_)) {
            while let Some(next) = tree.next_sibling(c) {
                let NodeKind::Text(text) = tree.kind(next).clone() else {
                    break;
                };
                let spans = tree.get(next).source_spans.clone();
                let node = tree.get_mut(c);
                if let NodeKind::Text(existing) = &mut node.kind {
                    existing.push_str(&text);
                }
                node.source_spans.add_all(&spans);
                tree.unlink(next);
            }
        } else {
            merge_text_nodes(tree, c);
        }
        child = tree.next_sibling(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::{SourceLine, SourceSpan};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(lines: &[&str]) -> (Tree, NodeId) {
        let mut content = SourceLines::empty();
        let mut input = 0;
        for (i, line) in lines.iter().enumerate() {
            content.push(SourceLine::new(
                *line,
                Some(SourceSpan::new(i, 0, input, line.len())),
            ));
            input += line.len() + 1;
        }
        let mut tree = Tree::new();
        let block = tree.create(NodeKind::Paragraph);
        tree.append_child(tree.root(), block);
        parse_inlines(&mut tree, block, &content);
        (tree, block)
    }

    /// Compact s-expression of the inline children, e.g. `em(x) " y"`.
    fn sexp(tree: &Tree, parent: NodeId) -> String {
        tree.children(parent)
            .map(|c| match tree.kind(c) {
                NodeKind::Text(t) => format!("{t:?}"),
                NodeKind::Code(t) => format!("code({t:?})"),
                NodeKind::SoftBreak => "br".to_owned(),
                NodeKind::Emphasis { .. } => format!("em({})", sexp(tree, c)),
                NodeKind::StrongEmphasis { .. } => format!("strong({})", sexp(tree, c)),
                other => other.name().to_owned(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn inline(text: &str) -> String {
        let (tree, block) = parse(&[text]);
        sexp(&tree, block)
    }

    #[rstest]
    #[case("plain text", r#""plain text""#)]
    #[case("''x''", r#"em("x")"#)]
    #[case("'''x'''", r#"strong("x")"#)]
    #[case("'''''x'''''", r#"em(strong("x"))"#)]
    #[case("a ''b'' c", r#""a " em("b") " c""#)]
    #[case("''a '''b''' c''", r#"em("a " strong("b") " c")"#)]
    #[case("don't", r#""don't""#)]
    #[case("''unclosed", r#""''unclosed""#)]
    #[case("'''x''", r#""'" em("x")"#)]
    #[case("''x'''", r#"em("x") "'""#)]
    #[case("*a* **b**", r#"em("a") " " strong("b")"#)]
    #[case("snake_case_name", r#""snake_case_name""#)]
    #[case("`''raw''`", r#"code("''raw''")"#)]
    #[case("\\''not\\''", r#""''not''""#)]
    #[case("a\\b", r#""a\\b""#)]
    #[case("trailing   ", r#""trailing""#)]
    fn inline_structure(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(inline(input), expected);
    }

    #[test]
    fn soft_break_between_lines() {
        let (tree, block) = parse(&["one  ", "two"]);
        assert_eq!(sexp(&tree, block), r#""one" br "two""#);
    }

    #[test]
    fn emphasis_spans_lines() {
        let (tree, block) = parse(&["''a", "b''"]);
        assert_eq!(sexp(&tree, block), r#"em("a" br "b")"#);
        let em = tree.first_child(block).unwrap();
        assert_eq!(
            tree.get(em).source_spans.as_slice(),
            &[SourceSpan::new(0, 0, 0, 3), SourceSpan::new(1, 0, 4, 3)]
        );
    }

    #[test]
    fn emphasis_span_is_union_of_parts() {
        let (tree, block) = parse(&["x '''bold''' y"]);
        let ids: Vec<_> = tree.children(block).collect();
        assert_eq!(
            tree.get(ids[1]).source_spans.as_slice(),
            &[SourceSpan::new(0, 2, 2, 10)]
        );
        let inner = tree.first_child(ids[1]).unwrap();
        assert_eq!(
            tree.get(inner).source_spans.as_slice(),
            &[SourceSpan::new(0, 5, 5, 4)]
        );
    }

    #[test]
    fn merged_text_keeps_contiguous_span() {
        let (tree, block) = parse(&["it's ok"]);
        let text = tree.first_child(block).unwrap();
        assert_eq!(tree.kind(text), &NodeKind::Text("it's ok".into()));
        assert_eq!(
            tree.get(text).source_spans.as_slice(),
            &[SourceSpan::new(0, 0, 0, 7)]
        );
    }

    #[test]
    fn empty_content_adds_nothing() {
        let (tree, block) = parse(&[]);
        assert_eq!(tree.first_child(block), None);
    }
}
