//! Whole-pipeline tests for the parsing module.
//!
//! Trees are pinned as inline text snapshots of [`format_tree`]; every parse
//! also runs the invariant checks.

use insta::assert_snapshot;
use xi_rope::Rope;

use crate::parsing::{
    ParseOptions, parse_document,
    snapshot::{format_tree, invariants},
    tree::{NodeKind, Tree},
};

fn parse_checked(text: &str) -> Tree {
    let rope = Rope::from(text);
    let doc = parse_document(&rope, &ParseOptions::default());
    invariants(&rope, &doc.tree);
    doc.tree
}

fn dump(text: &str) -> String {
    format_tree(&parse_checked(text))
}

#[test]
fn heading_tree() {
    assert_snapshot!(dump("= Heading 1 ="), @r#"
    Document
      Heading(1) @ 0:0..13
        Text "Heading 1" @ 0:2..11
    "#);
}

#[test]
fn emphasis_and_wiki_link() {
    assert_snapshot!(dump("''x'' and wiki:Foo"), @r#"
    Document
      Paragraph @ 0:0..18
        Emphasis '' @ 0:0..5
          Text "x" @ 0:2..3
        Text " and " @ 0:5..10
        Link "wiki:Foo" @ 0:15..18
          Text "Foo" @ 0:15..18
    "#);
}

#[test]
fn five_marks_nest_strong_in_emphasis() {
    assert_snapshot!(dump("'''''x'''''"), @r#"
    Document
      Paragraph @ 0:0..11
        Emphasis '' @ 0:0..11
          StrongEmphasis ''' @ 0:2..9
            Text "x" @ 0:5..6
    "#);
}

#[test]
fn code_fence_keeps_markup_literal() {
    assert_snapshot!(dump("{{{#!python\nhello = ''x''\n}}}"), @r#"
    Document
      FencedCodeBlock info="python" literal="hello = ''x''\n" @ 0:0..11, 1:0..13, 2:0..3
    "#);
}

#[test]
fn indented_quotes_nest_by_column() {
    assert_snapshot!(dump("  one\n    two"), @r#"
    Document
      BlockQuote @ 0:0..5, 1:0..7
        Paragraph @ 0:2..5
          Text "one" @ 0:2..5
        BlockQuote @ 1:2..7
          Paragraph @ 1:4..7
            Text "two" @ 1:4..7
    "#);
}

#[test]
fn ticket_link_across_soft_break() {
    assert_snapshot!(dump("see ticket:12\nand more"), @r##"
    Document
      Paragraph @ 0:0..13, 1:0..8
        Text "see " @ 0:0..4
        Link "ticket:12" @ 0:11..13
          Text "#12" @ 0:11..13
        SoftBreak
        Text "and more" @ 1:0..8
    "##);
}

/// Code spans are raw: nothing inside becomes emphasis or a link.
#[test]
fn code_spans_suppress_inline_markup() {
    let tree = parse_checked("`''wiki:Foo''`");
    let paragraph = tree.first_child(tree.root()).unwrap();
    let kinds: Vec<_> = tree.children(paragraph).map(|c| tree.kind(c).clone()).collect();
    assert_eq!(kinds, vec![NodeKind::Code("''wiki:Foo''".to_owned())]);
}

/// Unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let tree = parse_checked("''unclosed and `also unclosed");
    let paragraph = tree.first_child(tree.root()).unwrap();
    let texts: Vec<_> = tree
        .children(paragraph)
        .map(|c| tree.get(c).text().map(str::to_owned))
        .collect();
    assert_eq!(texts, vec![Some("''unclosed and `also unclosed".to_owned())]);
}

#[test]
fn empty_document() {
    let tree = parse_checked("");
    assert_eq!(tree.children(tree.root()).count(), 0);
}

#[test]
fn blank_lines_only() {
    let tree = parse_checked("\n\n\n");
    assert_eq!(tree.children(tree.root()).count(), 0);
}

#[test]
fn crlf_line_endings() {
    assert_snapshot!(dump("== T ==\r\nbody\r\n"), @r#"
    Document
      Heading(2) @ 0:0..7
        Text "T" @ 0:3..4
      Paragraph @ 1:0..4
        Text "body" @ 1:0..4
    "#);
}

#[test]
fn multibyte_text_keeps_byte_spans() {
    assert_snapshot!(dump("ünï wiki:Straße"), @r#"
    Document
      Paragraph @ 0:0..18
        Text "ünï " @ 0:0..6
        Link "wiki:Straße" @ 0:11..18
          Text "Straße" @ 0:11..18
    "#);
}

/// An escape makes the literal shorter than its source, so split fragments
/// get no spans instead of misaligned ones.
#[test]
fn escaped_text_links_without_spans() {
    assert_snapshot!(dump(r"a\*b wiki:X"), @r#"
    Document
      Paragraph @ 0:0..11
        Text "a*b "
        Link "wiki:X"
          Text "X"
    "#);
}
