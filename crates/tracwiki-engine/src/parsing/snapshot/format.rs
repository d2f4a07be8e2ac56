use std::fmt::Write;

use crate::parsing::{
    source::{SourceSpans, preview},
    tree::{NodeId, NodeKind, Tree},
};

const PREVIEW_LEN: usize = 40;

/// Renders the reachable tree as indented text, one node per line, with each
/// node's source spans as `line:start..end` column ranges.
///
/// ```text
/// Document
///   Heading(1) @ 0:0..11
///     Text "Heading 1" @ 0:2..11
/// ```
pub fn format_tree(tree: &Tree) -> String {
    let mut out = String::new();
    format_node(tree, tree.root(), 0, &mut out);
    out
}

fn format_node(tree: &Tree, id: NodeId, depth: usize, out: &mut String) {
    let node = tree.get(id);
    let _ = write!(out, "{:indent$}{}", "", describe(&node.kind), indent = depth * 2);
    if !node.source_spans.is_empty() {
        let _ = write!(out, " @ {}", format_spans(&node.source_spans));
    }
    out.push('\n');
    for child in tree.children(id) {
        format_node(tree, child, depth + 1, out);
    }
}

fn describe(kind: &NodeKind) -> String {
    let quoted = |s: &str| format!("{:?}", preview(s, PREVIEW_LEN));
    match kind {
        NodeKind::Heading { level } => format!("Heading({level})"),
        NodeKind::FencedCodeBlock(code) => format!(
            "FencedCodeBlock info={} literal={}",
            quoted(&code.info),
            quoted(&code.literal)
        ),
        NodeKind::Text(text) => format!("Text {}", quoted(text)),
        NodeKind::Code(text) => format!("Code {}", quoted(text)),
        NodeKind::Emphasis { delimiter } | NodeKind::StrongEmphasis { delimiter } => {
            format!("{} {delimiter}", kind.name())
        }
        NodeKind::Link { destination, .. } => format!("Link {}", quoted(destination)),
        other => other.name().to_owned(),
    }
}

pub fn format_spans(spans: &SourceSpans) -> String {
    spans
        .as_slice()
        .iter()
        .map(|s| {
            format!(
                "{}:{}..{}",
                s.line_index,
                s.column_index,
                s.column_index + s.length
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
